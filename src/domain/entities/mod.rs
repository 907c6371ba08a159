//! Core data structures of the shortening flow.

pub mod notification;
pub mod short_link;

pub use notification::{Notification, NotificationKind};
pub use short_link::{ShortenRequest, ShortenResult};
