//! Plain-text URL detection for terminal rendering
//!
//! CommonMark only links `<...>` autolinks, so bare `https://...` in article
//! text would otherwise render as ordinary text.

use once_cell::sync::Lazy;
use ratatui::{style::Style, text::Span};
use regex::Regex;

/// Plain http(s) URLs: no whitespace, angle brackets or square brackets
static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s<>\[\]]+").expect("Invalid URL regex pattern"));

/// Split `text` into spans, giving plain URLs `link_style`.
pub(crate) fn spans_with_urls(
    text: &str,
    base_style: Style,
    link_style: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for m in URL_REGEX.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(text[last_end..m.start()].to_string(), base_style));
        }
        spans.push(Span::styled(m.as_str().to_string(), link_style));
        last_end = m.end();
    }

    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    const BASE: Style = Style::new();
    const LINK: Style = Style::new().fg(Color::Blue);

    #[test]
    fn test_no_urls() {
        let spans = spans_with_urls("plain text", BASE, LINK);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "plain text");
    }

    #[test]
    fn test_url_in_middle() {
        let spans = spans_with_urls("see https://example.com/a now", BASE, LINK);
        let parts: Vec<(&str, Style)> = spans
            .iter()
            .map(|s| (s.content.as_ref(), s.style))
            .collect();
        assert_eq!(
            parts,
            vec![
                ("see ", BASE),
                ("https://example.com/a", LINK),
                (" now", BASE),
            ]
        );
    }

    #[test]
    fn test_multiple_urls() {
        let spans = spans_with_urls("http://a.io and http://b.io", BASE, LINK);
        let links: Vec<&str> = spans
            .iter()
            .filter(|s| s.style == LINK)
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(links, vec!["http://a.io", "http://b.io"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(spans_with_urls("", BASE, LINK).is_empty());
    }
}
