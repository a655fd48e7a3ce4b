//! Connection monitor - transport lifecycle to connectivity state
//!
//! The monitor is the only subscriber to the shared transport's lifecycle.
//! Other components request reconnection through it and observe the state
//! through a `watch` receiver.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use chatgate_core::{ConnectivityState, GateError, GateResult, LifecycleEvent};
use chatgate_transport::{EventHandler, HandlerId, Transport};

use crate::{Banner, BannerText, RetryAction};

/// Which attachment (if any) is allowed to mutate state
struct Lease {
    current: Option<u64>,
    next_generation: u64,
}

struct Shared {
    state: watch::Sender<ConnectivityState>,
    lease: Mutex<Lease>,
}

impl Shared {
    /// Reduce an event on behalf of attachment `generation`
    /// The lease lock is held across the update so a concurrent detach either
    /// waits for this reduction or makes it a no-op.
    fn apply(&self, generation: u64, event: LifecycleEvent) -> bool {
        let lease = self.lease.lock();
        if lease.current != Some(generation) {
            tracing::trace!(%event, generation, "Dropping event for detached subscription");
            return false;
        }

        match event {
            LifecycleEvent::Connected => tracing::info!("Transport connected"),
            LifecycleEvent::ConnectError => tracing::warn!("Transport connect error"),
            LifecycleEvent::Disconnected => tracing::warn!("Transport disconnected"),
        }

        self.state.send_if_modified(|state| {
            let prev = *state;
            let next = prev.reduce(event);
            if next == prev {
                return false;
            }
            tracing::debug!(from = ?prev, to = ?next, "Connectivity changed");
            *state = next;
            true
        })
    }
}

/// Tracks the health of the shared real-time transport
pub struct ConnectionMonitor {
    transport: Arc<dyn Transport>,
    shared: Arc<Shared>,
}

impl ConnectionMonitor {
    /// Create a monitor for `transport`. Nothing is subscribed until [`attach`](Self::attach).
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let (state, _) = watch::channel(ConnectivityState::default());
        ConnectionMonitor {
            transport,
            shared: Arc::new(Shared {
                state,
                lease: Mutex::new(Lease {
                    current: None,
                    next_generation: 0,
                }),
            }),
        }
    }

    /// Subscribe to `connect`, `connect_error` and `disconnect`
    ///
    /// At most one subscription is live at a time; a second call before the
    /// first is disposed fails with [`GateError::AlreadyAttached`]. If any
    /// registration fails, the handlers already registered are removed
    /// before the error is returned.
    pub fn attach(&self) -> GateResult<Subscription> {
        let generation = {
            let mut lease = self.shared.lease.lock();
            if lease.current.is_some() {
                return Err(GateError::AlreadyAttached);
            }
            let generation = lease.next_generation;
            lease.next_generation += 1;
            lease.current = Some(generation);
            generation
        };

        let mut subscription = Subscription {
            transport: self.transport.clone(),
            shared: self.shared.clone(),
            generation,
            handlers: Vec::with_capacity(LifecycleEvent::ALL.len()),
            released: false,
        };

        for event in LifecycleEvent::ALL {
            let shared = self.shared.clone();
            let handler: EventHandler = Arc::new(move |e: LifecycleEvent| {
                shared.apply(generation, e);
            });
            // On error `subscription` drops here and unwinds the partial registration.
            let id = self.transport.on(event, handler)?;
            subscription.handlers.push((event, id));
        }

        tracing::debug!(generation, "Connection monitor attached");
        Ok(subscription)
    }

    /// Reduce one lifecycle event. Ignored unless a subscription is live.
    /// Returns the state after reduction.
    pub fn on_event(&self, event: LifecycleEvent) -> ConnectivityState {
        let current = self.shared.lease.lock().current;
        if let Some(generation) = current {
            self.shared.apply(generation, event);
        }
        self.state()
    }

    /// Ask the transport to reconnect
    ///
    /// Always forwarded, even while healthy. State changes only when the
    /// transport later reports the outcome.
    pub fn retry(&self) {
        self.retry_action().invoke();
    }

    /// Bound reconnect callable for presentation controls
    pub fn retry_action(&self) -> RetryAction {
        RetryAction::new(self.transport.clone())
    }

    /// Current connectivity state
    pub fn state(&self) -> ConnectivityState {
        *self.shared.state.borrow()
    }

    /// Equivalent of the `hasError` flag
    pub fn has_error(&self) -> bool {
        self.state().has_error()
    }

    /// Observe state changes. Notifies only when the state actually changes.
    pub fn watch(&self) -> watch::Receiver<ConnectivityState> {
        self.shared.state.subscribe()
    }

    /// Banner to render, or `None` while healthy
    pub fn banner(&self, text: &BannerText) -> Option<Banner> {
        Banner::for_state(self.state(), text, self.retry_action())
    }

    pub fn is_attached(&self) -> bool {
        self.shared.lease.lock().current.is_some()
    }
}

/// Live lifecycle subscription returned by [`ConnectionMonitor::attach`]
///
/// Dropping it (or calling [`dispose`](Self::dispose)) deregisters all three
/// handlers. No handler mutates state once disposal has begun.
#[must_use = "dropping the subscription detaches the monitor immediately"]
pub struct Subscription {
    transport: Arc<dyn Transport>,
    shared: Arc<Shared>,
    generation: u64,
    handlers: Vec<(LifecycleEvent, HandlerId)>,
    released: bool,
}

impl Subscription {
    /// Detach from the transport
    pub fn dispose(mut self) {
        self.release();
    }

    /// Handlers currently registered through this subscription
    pub fn handler_ids(&self) -> impl Iterator<Item = (LifecycleEvent, HandlerId)> + '_ {
        self.handlers.iter().copied()
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        {
            let mut lease = self.shared.lease.lock();
            if lease.current == Some(self.generation) {
                lease.current = None;
            }
        }

        for (event, id) in self.handlers.drain(..) {
            if !self.transport.off(event, id) {
                tracing::debug!(%event, %id, "Handler was already deregistered");
            }
        }
        tracing::debug!(generation = self.generation, "Connection monitor detached");
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
