//! Style set for terminal markdown rendering

use ratatui::style::{Color, Modifier, Style};

/// Styles applied by [`super::render_lines`].
///
/// The UI builds one per theme from its palette; `Default` is the dark set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkdownStyles {
    /// Body text
    pub text: Style,
    /// `#` headings
    pub title: Style,
    /// `##` and deeper
    pub heading: Style,
    pub emphasis: Style,
    pub strong: Style,
    pub strikethrough: Style,
    pub inline_code: Style,
    pub code_block: Style,
    pub link: Style,
    pub quote: Style,
    pub list_marker: Style,
    /// Secondary text: link targets, rules, image placeholders
    pub dim: Style,
}

impl Default for MarkdownStyles {
    fn default() -> Self {
        Self {
            text: Style::new().fg(Color::Gray),
            title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            heading: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            emphasis: Style::new().add_modifier(Modifier::ITALIC),
            strong: Style::new().add_modifier(Modifier::BOLD),
            strikethrough: Style::new().add_modifier(Modifier::CROSSED_OUT),
            inline_code: Style::new().fg(Color::Cyan),
            code_block: Style::new().fg(Color::DarkGray),
            link: Style::new()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            quote: Style::new().fg(Color::DarkGray),
            list_marker: Style::new().fg(Color::DarkGray),
            dim: Style::new().fg(Color::DarkGray),
        }
    }
}
