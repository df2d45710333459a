//! Footer with copyright and version, and the key hint bar.

use chrono::Datelike;
use ratatui::{prelude::*, widgets::Paragraph};

use super::theme::Palette;
use crate::app::{App, ViewMode};
use crate::cli::VERSION;

/// Copyright line, `© {year} {username}`.
pub fn copyright_text(year: i32, username: Option<&str>) -> String {
    match username {
        Some(name) => format!("© {} {}", year, name),
        None => format!("© {}", year),
    }
}

/// Key hints for the active view.
pub fn key_hints(mode: ViewMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        ViewMode::List => &[
            ("↑↓", "select"),
            ("Enter", "open"),
            ("c", "copy email"),
            ("t", "theme"),
            ("q", "quit"),
        ],
        ViewMode::Detail => &[
            ("↑↓", "scroll"),
            ("PgUp/PgDn", "page"),
            ("Esc", "back"),
            ("t", "theme"),
            ("q", "quit"),
        ],
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let year = chrono::Local::now().year();
    let username = app.profile.as_ref().map(|p| p.username.as_str());

    let [info_area, hints_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let left = Paragraph::new(Span::styled(copyright_text(year, username), palette.dim_style()));
    let right = Paragraph::new(Span::styled(format!("v{}", VERSION), palette.dim_style()))
        .alignment(Alignment::Right);
    frame.render_widget(left, info_area);
    frame.render_widget(right, info_area);

    let mut spans = Vec::new();
    for (i, (key, action)) in key_hints(app.mode).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", palette.dim_style()));
        }
        spans.push(Span::styled(format!("[{}]", key), Style::new().fg(palette.text)));
        spans.push(Span::styled(format!(" {}", action), palette.dim_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), hints_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_text() {
        assert_eq!(copyright_text(2024, Some("ann")), "© 2024 ann");
        assert_eq!(copyright_text(2024, None), "© 2024");
    }

    #[test]
    fn test_key_hints_per_mode() {
        assert!(key_hints(ViewMode::List).iter().any(|(_, a)| *a == "open"));
        assert!(key_hints(ViewMode::Detail).iter().any(|(_, a)| *a == "back"));
    }
}
