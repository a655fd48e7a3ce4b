//! chatgate Test Harness - fakes and scenario checks
//!
//! This crate provides:
//! - A fake transport that records reconnect requests and can refuse registrations
//! - A scenario runner over the mounted monitor
//! - Cross-crate scenario and property tests

pub mod fake_transport;
pub mod scenario;

#[cfg(test)]
mod properties;

pub use fake_transport::*;
pub use scenario::*;
