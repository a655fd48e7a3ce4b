//! chatgate Transport Layer - lifecycle subscription and reconnection
//!
//! This crate provides:
//! - The `Transport` capability (per-event subscribe/unsubscribe + connect)
//! - An in-process dispatcher (`LocalTransport`)
//! - A tokio pump that feeds lifecycle events into the dispatcher in order

pub mod handler;
pub mod local;
pub mod pump;

pub use handler::*;
pub use local::*;
pub use pump::{start_event_pump, LifecycleReceiver, LifecycleSender};
