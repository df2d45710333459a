//! Theme preference and toggling.

use super::App;

/// Preference key holding the theme.
pub const THEME_KEY: &str = "theme";

/// Visual mode of the whole UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored preference. Only `"light"` selects the light theme;
    /// anything else, including absence, is dark.
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Value persisted under [`THEME_KEY`]
    pub fn as_preference(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl App {
    /// Apply the stored theme preference.
    pub(super) fn load_theme_preference(&mut self) {
        let stored = self.preferences.get(THEME_KEY);
        self.theme = Theme::from_preference(stored.as_deref());
        tracing::debug!("Applied stored theme: {:?}", self.theme);
        self.mark_dirty();
    }

    /// Flip between dark and light and persist the choice.
    ///
    /// A failed save is logged; the visual change stays.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.mark_dirty();

        if let Err(e) = self.preferences.set(THEME_KEY, self.theme.as_preference()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }
}
