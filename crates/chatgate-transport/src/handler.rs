//! Transport capability and handler registration types

use std::fmt;
use std::sync::Arc;

use chatgate_core::{GateResult, LifecycleEvent};

/// Identifies one registered handler on a transport
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(pub u64);

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler#{}", self.0)
    }
}

/// Callback invoked with the lifecycle event it was registered for
pub type EventHandler = Arc<dyn Fn(LifecycleEvent) + Send + Sync>;

/// Persistent bidirectional real-time connection, as seen by chatgate
///
/// Handshake and reconnection backoff belong to the implementation.
pub trait Transport: Send + Sync {
    /// Register `handler` for `event`
    fn on(&self, event: LifecycleEvent, handler: EventHandler) -> GateResult<HandlerId>;

    /// Deregister a handler. Returns false if it was not registered.
    fn off(&self, event: LifecycleEvent, id: HandlerId) -> bool;

    /// Request a (re)connection. Fire-and-forget: the outcome arrives later as
    /// a `Connected` or `ConnectError` event.
    fn connect(&self);
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn on(&self, event: LifecycleEvent, handler: EventHandler) -> GateResult<HandlerId> {
        (**self).on(event, handler)
    }

    fn off(&self, event: LifecycleEvent, id: HandlerId) -> bool {
        (**self).off(event, id)
    }

    fn connect(&self) {
        (**self).connect()
    }
}
