//! Active-link matching for the top navigation bar.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Links shown in the navigation bar, in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/copilot", "Copilot"),
    ("/generators", "Generators"),
    ("/deals", "Deal Tools"),
    ("/prediction", "Prediction"),
    ("/market", "Market"),
];

/// Whether the link `href` should be marked active for `path`.
///
/// A link is active when its href occurs in the path. The root link is the
/// exception: `/` occurs in every path, so it only matches the site root,
/// and `index.html` matches any path ending in `/`.
pub fn is_active_link(path: &str, href: &str) -> bool {
    match href {
        "/" => path == "/" || path.is_empty(),
        "index.html" => path.ends_with('/') || path.ends_with("index.html"),
        "" => false,
        _ => path.contains(href),
    }
}

/// Href of the single active link for `path`, if any.
pub fn active_href<'a>(path: &str, hrefs: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    hrefs.into_iter().find(|href| is_active_link(path, href))
}
