//! Error types for chatgate

use thiserror::Error;

/// Core chatgate errors
///
/// Lifecycle failures reported by the transport are not errors here; they are
/// reduced into [`crate::ConnectivityState`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("Monitor already attached to the transport")]
    AlreadyAttached,

    #[error("Transport closed: no further handler registrations accepted")]
    TransportClosed,

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for chatgate operations
pub type GateResult<T> = Result<T, GateError>;
