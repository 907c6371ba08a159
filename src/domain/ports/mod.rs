//! Boundary traits of the shortening flow.
//!
//! Implementations live in `crate::infrastructure`; mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! - [`Clipboard`] - Where copied short links go
//! - [`Notifier`] - Where user-facing notifications go

pub mod clipboard;
pub mod notifier;

pub use clipboard::{Clipboard, ClipboardError};
pub use notifier::Notifier;

#[cfg(test)]
pub use clipboard::MockClipboard;
#[cfg(test)]
pub use notifier::MockNotifier;
