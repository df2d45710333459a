//! Recording clipboard for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::traits::{ClipboardError, ClipboardSink};

/// [`ClipboardSink`] that records every write.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write, like a denied permission.
    pub fn failing() -> Self {
        let clipboard = Self::new();
        clipboard.set_should_fail(true);
        clipboard
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// Every successful write, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardSink for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if *self.should_fail.lock().unwrap() {
            return Err(ClipboardError::WriteFailed("permission denied".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_writes() {
        let clipboard = MockClipboard::new();
        clipboard.write_text("ann@x.com").await.unwrap();
        assert_eq!(clipboard.writes(), vec!["ann@x.com"]);
    }

    #[tokio::test]
    async fn test_failing_clipboard_records_nothing() {
        let clipboard = MockClipboard::failing();
        assert!(clipboard.write_text("ann@x.com").await.is_err());
        assert!(clipboard.writes().is_empty());
    }
}
