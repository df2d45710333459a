//! Command definitions for keyboard input handling.

/// Every user action reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Flip dark/light mode (t)
    ToggleTheme,
    /// Copy the profile email (c)
    CopyEmail,
    /// List cursor up or detail scroll up (Up, k)
    MoveUp,
    /// List cursor down or detail scroll down (Down, j)
    MoveDown,
    /// Open the selected article (Enter)
    OpenSelected,
    /// Return to the list (Esc, Backspace, b)
    BackToList,
    /// Detail page up (PgUp)
    PageUp,
    /// Detail page down (PgDn)
    PageDown,
    /// First row / top of article (Home, g)
    JumpToStart,
    /// Last row / end of article (End, G)
    JumpToEnd,
}
