//! Input handling: key events become [`Command`]s, commands mutate the App.
//!
//! ```text
//! KeyEvent -> map_key() -> Command -> App::execute_command()
//! ```

pub mod command;

pub use command::Command;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, ViewMode};

/// Translate a key event to a command.
///
/// Releases are ignored so terminals reporting both press and release do
/// not trigger twice.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('t') => Command::ToggleTheme,
        KeyCode::Char('c') => Command::CopyEmail,
        KeyCode::Up | KeyCode::Char('k') => Command::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Command::MoveDown,
        KeyCode::Enter => Command::OpenSelected,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Command::BackToList,
        KeyCode::PageUp => Command::PageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => Command::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Command::JumpToStart,
        KeyCode::End | KeyCode::Char('G') => Command::JumpToEnd,
        _ => return None,
    };
    Some(command)
}

impl App {
    /// Apply a command to the app state.
    pub fn execute_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit(),
            Command::ToggleTheme => self.toggle_theme(),
            Command::CopyEmail => self.copy_email(),
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::OpenSelected => {
                if self.mode == ViewMode::List && !self.loading {
                    self.open_selected();
                }
            }
            Command::BackToList => {
                if self.mode == ViewMode::Detail {
                    self.back_to_list();
                }
            }
            Command::PageUp => self.page_up(),
            Command::PageDown => self.page_down(),
            Command::JumpToStart => self.jump_to_start(),
            Command::JumpToEnd => self.jump_to_end(),
        }
    }

    /// Handle a key event; returns true if it mapped to a command.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match map_key(key) {
            Some(command) => {
                self.execute_command(command);
                true
            }
            None => false,
        }
    }
}
