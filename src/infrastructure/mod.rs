//! Infrastructure layer with concrete implementations of the domain ports.
//!
//! - [`clipboard`] - System and in-memory clipboards
//! - [`notify`] - Tracing and channel-backed notifiers

pub mod clipboard;
pub mod notify;
