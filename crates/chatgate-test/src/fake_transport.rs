//! Fake transport
//!
//! Stands in for the shared real-time connection. Records every reconnect
//! request and every registration, and can be told to refuse the Nth
//! registration to exercise attach unwinding.

use parking_lot::Mutex;

use chatgate_core::{GateError, GateResult, LifecycleEvent};
use chatgate_transport::{EventHandler, HandlerId, Transport};

#[derive(Default)]
struct FakeState {
    next_id: u64,
    handlers: Vec<(HandlerId, LifecycleEvent, EventHandler)>,
    registrations: usize,
    fail_at: Option<usize>,
    connect_calls: usize,
}

/// Recording transport for tests
#[derive(Default)]
pub struct FakeTransport {
    state: Mutex<FakeState>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse the registration with zero-based index `n`
    pub fn failing_at(n: usize) -> Self {
        let fake = Self::new();
        fake.state.lock().fail_at = Some(n);
        fake
    }

    /// Deliver one event to its handlers
    pub fn emit(&self, event: LifecycleEvent) -> usize {
        let targets: Vec<EventHandler> = self
            .state
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

    /// Deliver events in order
    pub fn emit_all(&self, events: &[LifecycleEvent]) {
        for event in events {
            self.emit(*event);
        }
    }

    /// Number of `connect()` calls received
    pub fn connect_calls(&self) -> usize {
        self.state.lock().connect_calls
    }

    /// Handlers currently registered
    pub fn live_handlers(&self) -> usize {
        self.state.lock().handlers.len()
    }

    /// Registration attempts, successful or not
    pub fn registrations(&self) -> usize {
        self.state.lock().registrations
    }
}

impl Transport for FakeTransport {
    fn on(&self, event: LifecycleEvent, handler: EventHandler) -> GateResult<HandlerId> {
        let mut state = self.state.lock();
        let attempt = state.registrations;
        state.registrations += 1;
        if state.fail_at == Some(attempt) {
            return Err(GateError::TransportError(format!(
                "registration {attempt} refused for {event}"
            )));
        }
        let id = HandlerId(state.next_id);
        state.next_id += 1;
        state.handlers.push((id, event, handler));
        Ok(id)
    }

    fn off(&self, event: LifecycleEvent, id: HandlerId) -> bool {
        let mut state = self.state.lock();
        let before = state.handlers.len();
        state.handlers.retain(|(h, e, _)| !(*h == id && *e == event));
        state.handlers.len() != before
    }

    fn connect(&self) {
        self.state.lock().connect_calls += 1;
    }
}
