//! Clipboard abstraction.
//!
//! Write-only text sink. The system implementation lives in
//! `crate::adapters::SystemClipboard`.

use async_trait::async_trait;

/// Clipboard operation errors.
#[derive(Debug, Clone)]
pub enum ClipboardError {
    /// No clipboard available (headless session, missing display server)
    Unavailable(String),
    /// The platform refused the write
    WriteFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::WriteFailed(msg) => write!(f, "Clipboard write failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

#[async_trait]
pub trait ClipboardSink: Send + Sync {
    /// Replace the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
