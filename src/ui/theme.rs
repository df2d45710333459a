//! Color palettes for the dark and light themes
//!
//! Widgets never pick colors directly; they read the [`Palette`] for the
//! app's current [`Theme`].

use ratatui::style::{Color, Modifier, Style};

use crate::app::Theme;
use crate::markdown::MarkdownStyles;

/// Colors used across the UI for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    /// Body text
    pub text: Color,
    /// Titles and the username
    pub accent: Color,
    /// Borders, dates, hints
    pub dim: Color,
    pub border: Color,
    /// Selected list row background
    pub selection: Color,
    pub link: Color,
    pub code: Color,
    pub error: Color,
    /// "COPIED!" badge
    pub success: Color,
}

/// Minimal dark palette
pub const DARK: Palette = Palette {
    background: Color::Reset,
    text: Color::Gray,
    accent: Color::White,
    dim: Color::DarkGray,
    border: Color::DarkGray,
    selection: Color::Rgb(40, 40, 50),
    link: Color::Rgb(0, 122, 204), // blue #007ACC
    code: Color::Cyan,
    error: Color::Red,
    success: Color::Rgb(4, 181, 117), // green #04B575
};

/// Light palette, dark text on a white background
pub const LIGHT: Palette = Palette {
    background: Color::White,
    text: Color::Rgb(40, 40, 40),
    accent: Color::Black,
    dim: Color::Rgb(120, 120, 120),
    border: Color::Rgb(190, 190, 190),
    selection: Color::Rgb(225, 225, 235),
    link: Color::Rgb(0, 92, 175),
    code: Color::Rgb(160, 60, 0),
    error: Color::Rgb(190, 0, 0),
    success: Color::Rgb(0, 135, 80),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    /// Base style for a full-screen fill
    pub fn base(&self) -> Style {
        Style::new().fg(self.text).bg(self.background)
    }

    pub fn dim_style(&self) -> Style {
        Style::new().fg(self.dim)
    }

    pub fn accent_style(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Styles for rendering article markdown in this palette
    pub fn markdown_styles(&self) -> MarkdownStyles {
        MarkdownStyles {
            text: Style::new().fg(self.text),
            title: Style::new().fg(self.accent).add_modifier(Modifier::BOLD),
            heading: Style::new().fg(self.accent).add_modifier(Modifier::BOLD),
            emphasis: Style::new().add_modifier(Modifier::ITALIC),
            strong: Style::new().fg(self.accent).add_modifier(Modifier::BOLD),
            strikethrough: Style::new().add_modifier(Modifier::CROSSED_OUT),
            inline_code: Style::new().fg(self.code),
            code_block: Style::new().fg(self.code),
            link: Style::new()
                .fg(self.link)
                .add_modifier(Modifier::UNDERLINED),
            quote: Style::new().fg(self.dim).add_modifier(Modifier::ITALIC),
            list_marker: Style::new().fg(self.dim),
            dim: Style::new().fg(self.dim),
        }
    }
}
