//! Notification port.

use crate::domain::entities::Notification;

/// Sink for user-facing notifications.
///
/// Delivery is fire-and-forget: a notifier that cannot deliver drops the
/// message, it never fails the operation that produced it.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
