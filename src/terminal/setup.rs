//! Terminal setup and teardown functions.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode (alternate screen, preserving the original content).
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Leave TUI mode and restore the terminal to its normal state.
///
/// Safe to call multiple times; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    // Disable raw mode first to allow normal terminal operation
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore the terminal after a panic or error, ignoring all failures.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
