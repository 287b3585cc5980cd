//! Markdown rendering for backend prose (chat replies).

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

/// Link schemes allowed through to the page.
const SAFE_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

fn is_safe_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    SAFE_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

/// Render markdown to HTML with all raw HTML removed.
///
/// Text is escaped by the renderer, so backend strings never reach the page
/// as markup. Images are dropped and links keep their text but lose the
/// anchor unless they point at http(s) or mailto.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // One entry per open link: whether its anchor was dropped.
    let mut dropped_links: Vec<bool> = Vec::new();
    let mut image_depth = 0usize;

    let parser = Parser::new_ext(markdown, options).filter_map(move |event| {
        if image_depth > 0 {
            match event {
                Event::Start(Tag::Image { .. }) => image_depth += 1,
                Event::End(TagEnd::Image) => image_depth -= 1,
                _ => {}
            }
            return None;
        }
        match event {
            Event::Html(_) | Event::InlineHtml(_) => None,
            Event::Start(Tag::Image { .. }) => {
                image_depth = 1;
                None
            }
            Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                let safe = is_safe_url(&dest_url);
                dropped_links.push(!safe);
                safe.then_some(Event::Start(Tag::Link { link_type, dest_url, title, id }))
            }
            Event::End(TagEnd::Link) => {
                if dropped_links.pop().unwrap_or(false) {
                    None
                } else {
                    Some(Event::End(TagEnd::Link))
                }
            }
            other => Some(other),
        }
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
