//! In-process clipboard.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{Clipboard, ClipboardError};

/// A clipboard that only lives as long as the process.
///
/// Used when no system clipboard tool is installed, or explicitly requested
/// from the CLI.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last copied text.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_replaces_contents() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().is_none());

        clipboard.write_text("https://short.ly/abc123").await.unwrap();
        clipboard.write_text("https://short.ly/xyz789").await.unwrap();

        assert_eq!(
            clipboard.contents().as_deref(),
            Some("https://short.ly/xyz789")
        );
    }
}
