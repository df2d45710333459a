//! Profile header: username, bio, email with copy badge, theme toggle.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::spinner_frame;
use super::theme::Palette;
use crate::app::App;

/// Rows taken by the header including borders
pub const HEADER_HEIGHT: u16 = 6;

/// Label of the theme toggle for the current mode
pub fn theme_toggle_label(is_dark_mode: bool) -> &'static str {
    if is_dark_mode {
        "Switch to Light Mode"
    } else {
        "Switch to Dark Mode"
    }
}

/// Badge next to the email
pub fn copy_badge(is_copied: bool) -> &'static str {
    if is_copied {
        "COPIED!"
    } else {
        "COPY"
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let toggle = Line::from(vec![
        Span::styled("[t] ", palette.dim_style()),
        Span::styled(theme_toggle_label(app.is_dark_mode()), palette.dim_style()),
        Span::raw(" "),
    ])
    .right_aligned();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(palette.border))
        .title(Line::from(Span::styled(" folio ", palette.accent_style())))
        .title(toggle);

    let lines = match app.profile.as_ref() {
        Some(profile) => {
            let mut lines = vec![
                Line::from(Span::styled(profile.username.clone(), palette.accent_style())),
                Line::from(Span::styled(profile.bio.clone(), Style::new().fg(palette.text))),
            ];

            if let Some(email) = profile.copyable_email() {
                let badge_style = if app.is_copied {
                    Style::new().fg(palette.success).add_modifier(Modifier::BOLD)
                } else {
                    palette.dim_style()
                };
                lines.push(Line::from(vec![
                    Span::styled("✉ ", palette.dim_style()),
                    Span::styled(email.to_string(), Style::new().fg(palette.link)),
                    Span::raw(" "),
                    Span::styled(format!("[c] {}", copy_badge(app.is_copied)), badge_style),
                ]));
            }

            if !profile.avatar_url.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("avatar: {}", profile.avatar_url),
                    palette.dim_style(),
                )));
            }
            lines
        }
        None if app.loading => vec![Line::from(Span::styled(
            format!("{} Loading...", spinner_frame(app.tick_count)),
            palette.dim_style(),
        ))],
        None => Vec::new(),
    };

    let header = Paragraph::new(lines)
        .block(block)
        .style(palette.base())
        .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}
