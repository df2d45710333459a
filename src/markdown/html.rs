//! Safe HTML projection of article markdown.

use pulldown_cmark::{html, CowStr, Event, Parser, Tag};

use super::parser_options;

/// URL schemes that can execute script when followed or loaded.
const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Replacement destination for neutralized links and images.
const NEUTRAL_URL: &str = "#";

/// True when `url` does not use a script-capable scheme.
///
/// Scheme comparison ignores case and leading/embedded ASCII whitespace and
/// control characters, which browsers also skip.
pub fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    !UNSAFE_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed(NEUTRAL_URL)
    }
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        // Raw HTML is emitted as escaped text instead of markup.
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

/// Convert markdown to a safe HTML fragment.
///
/// Empty input yields an empty string. Identical input always yields
/// identical output.
pub fn render_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }
    let parser = Parser::new_ext(markdown, parser_options()).map(sanitize_event);
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut out, parser);
    out
}
