//! Channel-backed notifier.

use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::entities::Notification;
use crate::domain::ports::Notifier;

/// Sends every notification to an unbounded channel.
///
/// The receiving side renders them; if it has gone away, notifications are
/// dropped.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiver its notifications arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            debug!("Notification receiver closed, dropping notification");
        }
    }
}
