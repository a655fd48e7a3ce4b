//! chatgate Core - Fundamental types for the client-side gatekeeper
//!
//! This crate defines the types shared by the transport and runtime crates:
//! - Transport lifecycle events
//! - Connectivity state and its reduction
//! - Session snapshots and the session store capability
//! - Access decisions for protected regions
//! - Error types

pub mod event;
pub mod connectivity;
pub mod session;
pub mod access;
pub mod error;

pub use event::*;
pub use connectivity::*;
pub use session::*;
pub use access::*;
pub use error::*;
