//! Clipboard implementations.
//!
//! Provides two implementations of [`crate::domain::ports::Clipboard`]:
//! - [`SystemClipboard`] - Pipes text into the platform clipboard tool
//! - [`MemoryClipboard`] - Keeps the text in process memory

mod memory_clipboard;
mod system_clipboard;

pub use memory_clipboard::MemoryClipboard;
pub use system_clipboard::{ClipboardCommand, SystemClipboard};
