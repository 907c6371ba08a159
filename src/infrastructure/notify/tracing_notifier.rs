//! Log-only notifier.

use tracing::{info, warn};

use crate::domain::entities::{Notification, NotificationKind};
use crate::domain::ports::Notifier;

/// Logs success notifications at `INFO` and destructive ones at `WARN`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
            NotificationKind::Destructive => warn!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
        }
    }
}
