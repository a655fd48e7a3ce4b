//! In-process transport dispatcher
//!
//! `LocalTransport` owns the handler registry for a connection whose actual
//! I/O lives elsewhere. Lifecycle events are fed in through [`LocalTransport::emit`]
//! (usually by the pump) and reconnect requests leave through a command channel.

use parking_lot::Mutex;
use tokio::sync::mpsc;

use chatgate_core::{GateError, GateResult, LifecycleEvent};

use crate::{EventHandler, HandlerId, Transport};

/// Request sent from chatgate to the connection driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportCommand {
    /// (Re)connect now
    Connect,
}

/// Command receiver held by the connection driver
pub type TransportCommandReceiver = mpsc::UnboundedReceiver<TransportCommand>;

struct Registry {
    next_id: u64,
    handlers: Vec<(HandlerId, LifecycleEvent, EventHandler)>,
    closed: bool,
}

/// In-process lifecycle dispatcher
pub struct LocalTransport {
    registry: Mutex<Registry>,
    commands: mpsc::UnboundedSender<TransportCommand>,
}

impl LocalTransport {
    /// Create a transport and the receiver for its outgoing commands
    pub fn new() -> (Self, TransportCommandReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let transport = LocalTransport {
            registry: Mutex::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
                closed: false,
            }),
            commands: tx,
        };
        (transport, rx)
    }

    /// Deliver an event to every handler registered for it, in registration order
    /// Returns the number of handlers invoked
    pub fn emit(&self, event: LifecycleEvent) -> usize {
        // Handlers run outside the lock so they may call `off`.
        let targets: Vec<EventHandler> = self
            .registry
            .lock()
            .handlers
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(_, _, h)| h.clone())
            .collect();

        for handler in &targets {
            handler(event);
        }
        targets.len()
    }

    /// Deliver an event reported by its transport-level name
    /// (`connect`, `connect_error`, `disconnect`). Unknown names are ignored
    /// and return `None`.
    pub fn emit_named(&self, name: &str) -> Option<usize> {
        match LifecycleEvent::from_name(name) {
            Some(event) => Some(self.emit(event)),
            None => {
                tracing::debug!(name, "Ignoring unknown lifecycle event");
                None
            }
        }
    }

    /// Number of live handlers for an event
    pub fn handler_count(&self, event: LifecycleEvent) -> usize {
        self.registry
            .lock()
            .handlers
            .iter()
            .filter(|(_, e, _)| *e == event)
            .count()
    }

    /// Stop accepting registrations. Existing handlers stay registered.
    pub fn close(&self) {
        self.registry.lock().closed = true;
    }
}

impl Transport for LocalTransport {
    fn on(&self, event: LifecycleEvent, handler: EventHandler) -> GateResult<HandlerId> {
        let mut registry = self.registry.lock();
        if registry.closed {
            return Err(GateError::TransportClosed);
        }
        let id = HandlerId(registry.next_id);
        registry.next_id += 1;
        registry.handlers.push((id, event, handler));
        Ok(id)
    }

    fn off(&self, event: LifecycleEvent, id: HandlerId) -> bool {
        let mut registry = self.registry.lock();
        let before = registry.handlers.len();
        registry
            .handlers
            .retain(|(hid, e, _)| !(*hid == id && *e == event));
        registry.handlers.len() != before
    }

    fn connect(&self) {
        if self.commands.send(TransportCommand::Connect).is_err() {
            tracing::warn!("Reconnect request dropped: connection driver gone");
        }
    }
}
