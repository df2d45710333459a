//! Type definitions for the App module.

/// Which of the two top-level views is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Article list (initial)
    #[default]
    List,
    /// A single article
    Detail,
}
