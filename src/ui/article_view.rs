//! Article detail: title, date, rendered body, "End of File" back control.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::{estimate_wrapped_line_count, spinner_frame};
use super::theme::Palette;
use crate::app::App;

/// Lines drawn around the rendered markdown body.
fn article_lines(app: &mut App, palette: &Palette) -> Vec<Line<'static>> {
    let body = app.rendered_lines();
    let Some(article) = app.current_article() else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(body.len() + 8);
    if let Some(error) = app.error.as_ref() {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::new().fg(palette.error),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        article.title().to_string(),
        palette.accent_style(),
    )));
    lines.push(Line::from(Span::styled(
        article.publish_date().to_string(),
        palette.dim_style(),
    )));
    lines.push(Line::default());
    lines.extend(body);
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("── ", palette.dim_style()),
        Span::styled("End of File", palette.dim_style()),
        Span::styled(" ── ", palette.dim_style()),
        Span::styled("[Esc] Back", Style::new().fg(palette.link)),
    ]));
    lines
}

pub fn render_article_view(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(palette.border))
        .title(Span::styled(" ← Back ", Style::new().fg(palette.link)));
    if app.loading {
        let indicator = format!(" {} Loading... ", spinner_frame(app.tick_count));
        block = block
            .title(Line::from(Span::styled(indicator, palette.dim_style())).right_aligned());
    }
    let inner = block.inner(area);

    let lines = article_lines(app, palette);
    let total = estimate_wrapped_line_count(&lines, inner.width as usize);
    app.detail_viewport_height = inner.height;
    app.detail_max_scroll = total
        .saturating_sub(inner.height as usize)
        .min(u16::MAX as usize) as u16;
    if app.detail_scroll > app.detail_max_scroll {
        app.detail_scroll = app.detail_max_scroll;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    frame.render_widget(paragraph, area);
}
