//! System clipboard adapter.
//!
//! Uses `arboard` to reach the OS clipboard (NSPasteboard on macOS,
//! X11/Wayland on Linux). arboard is blocking, so writes run on the blocking
//! thread pool.

use async_trait::async_trait;

use crate::traits::{ClipboardError, ClipboardSink};

/// [`ClipboardSink`] backed by the OS clipboard.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn write_blocking(text: String) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || Self::write_blocking(text))
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
    }
}
