//! UI rendering for folio
//!
//! Layout, top to bottom:
//! - Header with the profile and the theme toggle
//! - Main area: article list, article detail, or the load error
//! - Footer: copyright/version and key hints

mod article_list;
mod article_view;
mod footer;
mod header;
pub mod helpers;
pub mod theme;

pub use footer::{copyright_text, key_hints};
pub use header::{copy_badge, theme_toggle_label};
pub use theme::Palette;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use crate::app::{App, ViewMode};
use article_list::render_article_list;
use article_view::render_article_view;
use footer::render_footer;
use header::{render_header, HEADER_HEIGHT};

/// Rows taken by the footer
const FOOTER_HEIGHT: u16 = 2;

/// Render the whole UI for the current state
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let [header_area, main_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    render_header(frame, header_area, app, &palette);

    // A failed initial load replaces all content with the error
    if app.profile.is_none() && !app.loading {
        if let Some(error) = app.error.as_ref() {
            let message = Span::styled(error.clone(), Style::new().fg(palette.error));
            let paragraph = Paragraph::new(message)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            let [_, centered, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .areas(main_area);
            frame.render_widget(paragraph, centered);
            render_footer(frame, footer_area, app, &palette);
            return;
        }
    }

    match app.mode {
        ViewMode::List => render_article_list(frame, main_area, app, &palette),
        ViewMode::Detail => render_article_view(frame, main_area, app, &palette),
    }

    render_footer(frame, footer_area, app, &palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::*;
    use crate::app::LOAD_DATA_ERROR;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[tokio::test]
    async fn test_list_view_shows_rows() {
        let mut h = loaded().await;
        let screen = draw(&mut h.app);
        assert!(screen.contains("ann"));
        assert!(screen.contains("ann@x.com"));
        assert!(screen.contains("COPY"));
        assert!(screen.contains("Date"));
        assert!(screen.contains("File Name"));
        assert!(screen.contains("2024-01-01"));
        assert!(screen.contains("First"));
        assert!(screen.contains("Switch to Light Mode"));
    }

    #[tokio::test]
    async fn test_detail_view_shows_article() {
        let mut h = loaded().await;
        h.app.view_article("10");
        h.app.process_next_message().await;

        let screen = draw(&mut h.app);
        assert!(screen.contains("First"));
        assert!(screen.contains("# Hi"));
        assert!(screen.contains("End of File"));
        assert!(!screen.contains("File Name"));
    }

    #[test]
    fn test_loading_state() {
        let mut h = harness();
        h.app.loading = true;
        let screen = draw(&mut h.app);
        assert!(screen.contains("Loading..."));
        assert!(screen.contains("Loading data..."));
    }

    #[test]
    fn test_initial_error_replaces_content() {
        let mut h = harness();
        h.app.error = Some(LOAD_DATA_ERROR.to_string());
        let screen = draw(&mut h.app);
        assert!(screen.contains(LOAD_DATA_ERROR));
        assert!(!screen.contains("File Name"));
    }

    #[tokio::test]
    async fn test_empty_article_list() {
        let http = crate::adapters::MockHttpClient::new();
        http.set_json("http://blog.test/api/profile", PROFILE_JSON);
        http.set_json("http://blog.test/api/articles", "[]");
        let mut h = harness_with(http, crate::adapters::InMemoryPreferences::new());
        h.app.init();
        h.app.process_next_message().await;

        assert!(draw(&mut h.app).contains("No articles found."));
    }

    #[tokio::test]
    async fn test_light_theme_label_and_copied_badge() {
        let mut h = loaded().await;
        h.app.toggle_theme();
        h.app.is_copied = true;
        let screen = draw(&mut h.app);
        assert!(screen.contains("Switch to Dark Mode"));
        assert!(screen.contains("COPIED!"));
    }

    #[tokio::test]
    async fn test_render_clamps_detail_scroll() {
        let mut h = loaded().await;
        h.app.view_article("10");
        h.app.process_next_message().await;
        h.app.detail_scroll = 500;

        draw(&mut h.app);
        assert_eq!(h.app.detail_scroll, h.app.detail_max_scroll);
        assert!(h.app.detail_viewport_height > 0);
    }
}
