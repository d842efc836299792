//! Fan-out hub between the bus listener and socket subscribers.
//!
//! Design principles:
//! - Broadcast channel (tokio) - every subscriber receives every notification
//! - Bounded queue per subscriber, oldest entries dropped on overflow
//! - A stalled subscriber never blocks the producer or its peers

use log::debug;
use noticker_proto::Notification;
use tokio::sync::broadcast;

/// Broadcast channel capacity.
/// 64 absorbs notification bursts without memory bloat; a receiver that
/// falls further behind loses the oldest pending entries first.
pub const CHANNEL_CAPACITY: usize = 64;

/// Clone-on-send distribution hub.
///
/// Subscribers registered through [`Broadcaster::subscribe`] only see
/// notifications sent after registration; there is no replay of missed
/// history.
pub struct Broadcaster {
    tx: broadcast::Sender<Notification>,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Register a new subscriber.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Deliver a notification to every live subscriber and report how many
    /// queues it reached. With nobody listening it is silently dropped.
    pub fn send(&self, notification: Notification) -> usize {
        match self.tx.send(notification) {
            Ok(count) => count,
            Err(_) => {
                debug!("No subscribers connected, notification dropped");
                0
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
