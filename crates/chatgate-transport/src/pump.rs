//! Lifecycle event pump

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use chatgate_core::LifecycleEvent;

use crate::LocalTransport;

/// Lifecycle event receiver channel
pub type LifecycleReceiver = mpsc::Receiver<LifecycleEvent>;

/// Lifecycle event sender channel, held by the connection driver
pub type LifecycleSender = mpsc::Sender<LifecycleEvent>;

/// Start a background loop that dispatches lifecycle events into `transport`
///
/// Events are dispatched one at a time, in the order they were sent. The
/// task ends once every sender is dropped and yields the number of events
/// dispatched.
pub fn start_event_pump(
    transport: Arc<LocalTransport>,
    mut events: LifecycleReceiver,
) -> JoinHandle<u64> {
    tokio::spawn(async move {
        let mut dispatched = 0u64;
        while let Some(event) = events.recv().await {
            let handlers = transport.emit(event);
            if handlers == 0 {
                tracing::debug!(%event, "Lifecycle event had no subscribers");
            }
            dispatched += 1;
        }
        dispatched
    })
}
