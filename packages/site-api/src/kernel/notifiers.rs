//! Notifier implementations.
//!
//! Presentation is owned by whoever consumes these: a terminal, a UI event
//! loop, or a log pipeline.

use tokio::sync::mpsc;
use tracing::{info, warn};

use super::BaseNotifier;
use crate::notifications::Notification;

/// Emits notifications as log events.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl BaseNotifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_destructive() {
            warn!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            );
        } else {
            info!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            );
        }
    }
}

/// Forwards notifications to a receiver owned by the presentation layer.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl BaseNotifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            warn!("Notification dropped: receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_notifier_forwards_in_order() {
        let (notifier, mut rx) = ChannelNotifier::new();

        notifier.notify(Notification::success("Subscribed!", "Welcome"));
        notifier.notify(Notification::destructive("Error", "Nope"));

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.title, "Subscribed!");
        assert!(second.is_destructive());
    }

    #[test]
    fn test_channel_notifier_survives_closed_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);

        notifier.notify(Notification::success("Success!", "sent"));
    }
}
