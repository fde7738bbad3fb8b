//! Event bus using mpsc channels.
//!
//! The bus provides a simple publish/subscribe mechanism where:
//! - UI code and overlay close notifications publish via `EventPublisher::publish()`
//! - The dispatcher drains once per frame via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Event bus for application-wide event distribution.
///
/// Uses a multi-producer, single-consumer (mpsc) channel internally.
///
/// # Example
///
/// ```
/// use pointer::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::StartPointer);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle. Publishers are cheap to clone.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds a sender itself, so this never disconnects.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec, in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// If the bus has been dropped (app shutting down), the send
    /// silently fails.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}
