//! Notification router
//!
//! Publishes identity-tagged events to every subscriber over a
//! `tokio::sync::broadcast` channel. Publishing never blocks and never fails:
//! with no subscriber the notification is counted as dropped and discarded.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast;

use super::notification::{Notification, NotificationEvent};
use crate::player::StreamId;
use crate::stats::RouterStats;

/// Fan-out point for stream notifications
///
/// Events published from one thread reach each subscriber in the order they
/// were published. A subscriber that falls more than `capacity` notifications
/// behind skips the oldest ones (`RecvError::Lagged`).
pub struct NotificationRouter {
    tx: broadcast::Sender<Notification>,
    published: AtomicU64,
    dropped: AtomicU64,
}

impl NotificationRouter {
    /// Create a router buffering up to `capacity` notifications per subscriber
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));

        Self {
            tx,
            published: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    /// Subscribe to all future notifications
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Publish an event for a stream
    ///
    /// Returns the number of subscribers that received it.
    pub fn publish(&self, id: StreamId, event: NotificationEvent) -> usize {
        match self.tx.send(Notification::new(id, event)) {
            Ok(receivers) => {
                self.published.fetch_add(1, Ordering::Relaxed);
                receivers
            }
            Err(_) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(stream_id = id, "Notification dropped, no subscribers");
                0
            }
        }
    }

    /// Delivery counters
    pub fn stats(&self) -> RouterStats {
        RouterStats {
            published: self.published.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            subscribers: self.subscriber_count(),
        }
    }
}

impl Default for NotificationRouter {
    fn default() -> Self {
        Self::new(256)
    }
}
