//! Unsolicited event delivery.

use std::sync::mpsc::{channel, Receiver, Sender};

use serde_json::Value;

/// Event categories the host can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Status messages with no matching pending call.
    Model,
    /// Node lifecycle (deletion).
    Node,
    /// Bluetooth adapter state.
    Adapter,
    /// Proxy connection state.
    Connection,
}

/// One delivered event.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeEvent {
    pub kind: EventKind,
    pub payload: Value,
}

/// Fan-out bus for unsolicited events.
///
/// Subscribers register per kind; a publish clones the payload to every
/// live subscriber of that kind and silently drops subscribers whose
/// receiver is gone.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<(EventKind, Sender<BridgeEvent>)>,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus { subscribers: Vec::new() }
    }

    /// Register interest in one event kind.
    pub fn subscribe(&mut self, kind: EventKind) -> Receiver<BridgeEvent> {
        let (tx, rx) = channel();
        self.subscribers.push((kind, tx));
        rx
    }

    /// Deliver a payload to every subscriber of `kind`.
    pub fn publish(&mut self, kind: EventKind, payload: Value) {
        self.subscribers.retain(|(subscribed, tx)| {
            if *subscribed != kind {
                return true;
            }
            tx.send(BridgeEvent { kind, payload: payload.clone() }).is_ok()
        });
    }
}
