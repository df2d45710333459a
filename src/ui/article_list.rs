//! Article list: "Date / File Name" table with a keyboard cursor.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use super::helpers::truncate_string;
use super::theme::Palette;
use crate::app::App;

/// Width of the date column
const DATE_COLUMN_WIDTH: usize = 12;

const HIGHLIGHT_SYMBOL: &str = "▸ ";
const HIGHLIGHT_SYMBOL_PAD: &str = "  ";

pub fn render_article_list(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(palette.border))
        .title(Span::styled(" Articles ", palette.accent_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = app.error.as_ref() {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::new().fg(palette.error),
        )));
    }
    // Indented to line up with rows behind the highlight symbol
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}{:<width$}", HIGHLIGHT_SYMBOL_PAD, "Date", width = DATE_COLUMN_WIDTH),
            palette.dim_style(),
        ),
        Span::styled("File Name", palette.dim_style()),
    ]));

    let preamble_height = lines.len() as u16;
    let preamble = Paragraph::new(lines);
    frame.render_widget(
        preamble,
        Rect::new(inner.x, inner.y, inner.width, preamble_height.min(inner.height)),
    );

    let list_area = Rect::new(
        inner.x,
        inner.y + preamble_height.min(inner.height),
        inner.width,
        inner.height.saturating_sub(preamble_height),
    );

    if app.articles.is_empty() {
        let text = if app.loading { "Loading data..." } else { "No articles found." };
        frame.render_widget(
            Paragraph::new(Span::styled(text, palette.dim_style())),
            list_area,
        );
        return;
    }

    let title_width =
        (inner.width as usize).saturating_sub(DATE_COLUMN_WIDTH + HIGHLIGHT_SYMBOL_PAD.len());
    let items: Vec<ListItem> = app
        .articles
        .iter()
        .map(|article| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(
                        "{:<width$}",
                        truncate_string(&article.publish_date, DATE_COLUMN_WIDTH - 1),
                        width = DATE_COLUMN_WIDTH
                    ),
                    palette.dim_style(),
                ),
                Span::styled(
                    truncate_string(&article.title, title_width),
                    Style::new().fg(palette.text),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::new()
                .bg(palette.selection)
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, list_area, &mut state);
}
