//! Notifier implementations.
//!
//! - [`TracingNotifier`] - Writes notifications to the log
//! - [`ChannelNotifier`] - Forwards notifications to a receiver owned by a front-end

mod channel_notifier;
mod tracing_notifier;

pub use channel_notifier::ChannelNotifier;
pub use tracing_notifier::TracingNotifier;
