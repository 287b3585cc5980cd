use super::*;

fn hrefs() -> impl Iterator<Item = &'static str> {
    NAV_LINKS.iter().map(|(href, _)| *href)
}

#[test]
fn root_path_activates_dashboard_only() {
    let active: Vec<_> = hrefs().filter(|h| is_active_link("/", h)).collect();
    assert_eq!(active, ["/"]);
}

#[test]
fn page_path_activates_its_own_link_only() {
    for (href, _) in NAV_LINKS.iter().skip(1) {
        let active: Vec<_> = hrefs().filter(|h| is_active_link(href, h)).collect();
        assert_eq!(active, [*href], "path {href}");
    }
}

#[test]
fn nested_path_still_matches_section() {
    assert_eq!(active_href("/deals/42", hrefs()), Some("/deals"));
}

#[test]
fn unknown_path_activates_nothing() {
    assert_eq!(active_href("/settings", hrefs()), None);
}

#[test]
fn index_html_matches_trailing_slash() {
    assert!(is_active_link("/static/", "index.html"));
    assert!(is_active_link("/index.html", "index.html"));
    assert!(!is_active_link("/copilot.html", "index.html"));
}

#[test]
fn file_style_hrefs_match_by_substring() {
    assert!(is_active_link("/pages/copilot.html", "copilot.html"));
    assert!(!is_active_link("/pages/copilot.html", "generators.html"));
}

#[test]
fn empty_href_never_matches() {
    assert!(!is_active_link("/copilot", ""));
}
