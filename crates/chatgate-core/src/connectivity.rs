//! Connectivity state and its reduction
//!
//! Two states, `Healthy` (initial) and `Degraded`:
//! - Healthy --ConnectError|Disconnected--> Degraded
//! - Degraded --Connected--> Healthy
//! - Healthy --Connected--> Healthy
//!
//! There is no terminal state and no automatic retry.

use crate::LifecycleEvent;

/// User-facing connectivity flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ConnectivityState {
    #[default]
    Healthy,
    Degraded,
}

impl ConnectivityState {
    /// Reduce one lifecycle event into the next state
    /// INVARIANT: the result depends only on the event, never on the prior state
    pub fn reduce(self, event: LifecycleEvent) -> Self {
        match event {
            LifecycleEvent::Connected => ConnectivityState::Healthy,
            LifecycleEvent::ConnectError | LifecycleEvent::Disconnected => {
                ConnectivityState::Degraded
            }
        }
    }

    /// Reduce a sequence of events in order, starting from `Healthy`
    pub fn replay<I>(events: I) -> Self
    where
        I: IntoIterator<Item = LifecycleEvent>,
    {
        events
            .into_iter()
            .fold(ConnectivityState::default(), ConnectivityState::reduce)
    }

    /// Equivalent of the `hasError` flag
    #[inline]
    pub fn has_error(self) -> bool {
        matches!(self, ConnectivityState::Degraded)
    }

    /// Should presentation show the banner with a retry control?
    #[inline]
    pub fn shows_banner(self) -> bool {
        self.has_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_event() -> impl Strategy<Value = LifecycleEvent> {
        prop_oneof![
            Just(LifecycleEvent::Connected),
            Just(LifecycleEvent::ConnectError),
            Just(LifecycleEvent::Disconnected),
        ]
    }

    #[test]
    fn test_initial_state() {
        let state = ConnectivityState::default();
        assert_eq!(state, ConnectivityState::Healthy);
        assert!(!state.has_error());
        assert_eq!(ConnectivityState::replay(std::iter::empty()), ConnectivityState::Healthy);
    }

    #[test]
    fn test_transitions() {
        use crate::ConnectivityState::*;
        use crate::LifecycleEvent::*;

        assert_eq!(Healthy.reduce(ConnectError), Degraded);
        assert_eq!(Healthy.reduce(Disconnected), Degraded);
        assert_eq!(Healthy.reduce(Connected), Healthy);
        assert_eq!(Degraded.reduce(Connected), Healthy);
        assert_eq!(Degraded.reduce(ConnectError), Degraded);
        assert_eq!(Degraded.reduce(Disconnected), Degraded);
    }

    #[test]
    fn test_replay_scenarios() {
        use crate::LifecycleEvent::*;

        assert!(ConnectivityState::replay([ConnectError]).shows_banner());
        assert!(!ConnectivityState::replay([ConnectError, Connected]).shows_banner());
        assert_eq!(
            ConnectivityState::replay([Disconnected, Disconnected, Connected, Disconnected]),
            ConnectivityState::Degraded
        );
    }

    proptest! {
        #[test]
        fn prop_final_state_follows_last_event(events in proptest::collection::vec(any_event(), 0..64)) {
            let state = ConnectivityState::replay(events.iter().copied());
            match events.last() {
                None | Some(LifecycleEvent::Connected) => prop_assert!(!state.has_error()),
                Some(_) => prop_assert!(state.has_error()),
            }
        }

        #[test]
        fn prop_reduce_is_idempotent(start in prop_oneof![
            Just(ConnectivityState::Healthy),
            Just(ConnectivityState::Degraded),
        ], event in any_event()) {
            let once = start.reduce(event);
            prop_assert_eq!(once.reduce(event), once);
        }
    }
}
