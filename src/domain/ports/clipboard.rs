//! Clipboard port.

use async_trait::async_trait;

/// Errors that can occur while writing to a clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard is available on this system")]
    Unavailable,

    #[error("Clipboard command `{command}` exited with {status}")]
    CommandFailed { command: String, status: String },

    #[error("Clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for copied text.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::SystemClipboard`] - Platform clipboard tool
/// - [`crate::infrastructure::clipboard::MemoryClipboard`] - In-process buffer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
