//! Scenario runner
//!
//! Mounts a monitor on a fresh [`FakeTransport`], plays a list of lifecycle
//! events through it and reports what presentation would see.

use std::sync::Arc;

use chatgate_core::{ConnectivityState, GateResult, LifecycleEvent};
use chatgate_runtime::{BannerText, ConnectionMonitor};

use crate::FakeTransport;

/// What presentation observes after a scenario
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenarioReport {
    pub state: ConnectivityState,
    pub banner_visible: bool,
    pub connect_requests: usize,
}

/// Play `events` through an attached monitor
pub fn run_scenario(events: &[LifecycleEvent]) -> GateResult<ScenarioReport> {
    let transport = Arc::new(FakeTransport::new());
    let monitor = ConnectionMonitor::new(transport.clone());
    let _subscription = monitor.attach()?;

    transport.emit_all(events);

    Ok(ScenarioReport {
        state: monitor.state(),
        banner_visible: monitor.banner(&BannerText::default()).is_some(),
        connect_requests: transport.connect_calls(),
    })
}
