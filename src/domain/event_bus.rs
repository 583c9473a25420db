//! Publish point for render events.
//!
//! [`EventBus`] keeps one unbounded [`tokio::sync::mpsc`] queue per
//! subscriber. Publishing never blocks and never drops an event for a live
//! subscriber; each subscriber sees every event in publish order, however
//! late it drains. Subscribers that dropped their receiver are pruned on
//! the next publish.

use tokio::sync::mpsc;

use super::RenderEvent;

/// Receiving end handed to render subscribers.
pub type RenderReceiver = mpsc::UnboundedReceiver<RenderEvent>;

/// Fan-out of [`RenderEvent`]s to every live subscriber.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<mpsc::UnboundedSender<RenderEvent>>,
}

impl EventBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every live subscriber.
    ///
    /// Returns how many subscribers it was queued for. With none, the
    /// event is dropped.
    pub fn publish(&mut self, event: &RenderEvent) -> usize {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        self.subscribers.len()
    }

    /// Registers a subscriber for all future events.
    #[must_use]
    pub fn subscribe(&mut self) -> RenderReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Number of subscribers whose receiver is still alive.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.subscribers.iter().filter(|tx| !tx.is_closed()).count()
    }
}
