//! Property checks over the mounted monitor and the guard

use std::sync::Arc;

use proptest::prelude::*;

use chatgate_core::{AccessDecision, LifecycleEvent, MemorySessionStore, Session};
use chatgate_runtime::{AccessGuard, ConnectionMonitor};

use crate::{run_scenario, FakeTransport};

fn any_event() -> impl Strategy<Value = LifecycleEvent> {
    prop_oneof![
        Just(LifecycleEvent::Connected),
        Just(LifecycleEvent::ConnectError),
        Just(LifecycleEvent::Disconnected),
    ]
}

fn any_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        Just(Some(String::new())),
        "[a-z0-9@.]{1,16}".prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn prop_state_follows_last_event(events in proptest::collection::vec(any_event(), 0..48)) {
        let report = run_scenario(&events).unwrap();
        let expect_error = events.last().map_or(false, |e| e.is_failure());
        prop_assert_eq!(report.state.has_error(), expect_error);
        prop_assert_eq!(report.banner_visible, expect_error);
    }

    #[test]
    fn prop_repeated_event_is_idempotent(
        prefix in proptest::collection::vec(any_event(), 0..16),
        event in any_event(),
    ) {
        let mut once = prefix.clone();
        once.push(event);
        let mut twice = once.clone();
        twice.push(event);

        prop_assert_eq!(run_scenario(&once).unwrap().state, run_scenario(&twice).unwrap().state);
    }

    #[test]
    fn prop_detached_monitor_is_frozen(
        before in proptest::collection::vec(any_event(), 0..16),
        after in proptest::collection::vec(any_event(), 1..16),
    ) {
        let transport = Arc::new(FakeTransport::new());
        let monitor = ConnectionMonitor::new(transport.clone());
        let subscription = monitor.attach().unwrap();

        transport.emit_all(&before);
        subscription.dispose();
        let frozen = monitor.state();

        transport.emit_all(&after);
        prop_assert_eq!(monitor.state(), frozen);
        prop_assert_eq!(transport.live_handlers(), 0);
    }

    #[test]
    fn prop_guard_matches_truth_table(identity in any_field(), room in any_field()) {
        let session = Session { identity: identity.clone(), room_membership: room.clone() };
        let guard = AccessGuard::new(MemorySessionStore::new(session), "");

        let allowed = identity.map_or(false, |s| !s.is_empty())
            && room.map_or(false, |s| !s.is_empty());
        let expected = if allowed {
            AccessDecision::Render
        } else {
            AccessDecision::RedirectTo(String::new())
        };

        prop_assert_eq!(guard.evaluate(), expected.clone());
        prop_assert_eq!(guard.evaluate(), expected);
    }

    #[test]
    fn prop_retry_always_forwarded(events in proptest::collection::vec(any_event(), 0..16), retries in 0usize..8) {
        let transport = Arc::new(FakeTransport::new());
        let monitor = ConnectionMonitor::new(transport.clone());
        let _subscription = monitor.attach().unwrap();

        transport.emit_all(&events);
        let state = monitor.state();
        for _ in 0..retries {
            monitor.retry();
        }
        prop_assert_eq!(transport.connect_calls(), retries);
        prop_assert_eq!(monitor.state(), state);
    }
}
