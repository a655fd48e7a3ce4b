//! Transport lifecycle events
//!
//! The real-time transport reports its connection status through three
//! named events. Nothing else about the transport is visible to chatgate.

use std::fmt;

/// Lifecycle notification emitted by the transport
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Connection established (initially or after a reconnect)
    Connected,
    /// Initial or reconnection attempt failed
    ConnectError,
    /// Established connection dropped
    Disconnected,
}

impl LifecycleEvent {
    /// Every lifecycle event, in registration order
    pub const ALL: [LifecycleEvent; 3] = [
        LifecycleEvent::Connected,
        LifecycleEvent::ConnectError,
        LifecycleEvent::Disconnected,
    ];

    /// Transport-level event name
    pub fn name(self) -> &'static str {
        match self {
            LifecycleEvent::Connected => "connect",
            LifecycleEvent::ConnectError => "connect_error",
            LifecycleEvent::Disconnected => "disconnect",
        }
    }

    /// Parse from a transport-level event name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "connect" => Some(LifecycleEvent::Connected),
            "connect_error" => Some(LifecycleEvent::ConnectError),
            "disconnect" => Some(LifecycleEvent::Disconnected),
            _ => None,
        }
    }

    /// Does this event report a failure?
    pub fn is_failure(self) -> bool {
        !matches!(self, LifecycleEvent::Connected)
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
