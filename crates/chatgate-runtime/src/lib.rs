//! chatgate Runtime - Connectivity & access guard for the chat client shell
//!
//! This crate composes:
//! 1. `ConnectionMonitor` - reduces transport lifecycle events into a
//!    connectivity state and forwards manual reconnect requests
//! 2. `Banner` - what presentation renders while degraded
//! 3. `AccessGuard` - per-navigation authorization against a session store
//! 4. `RouteTable` / `Navigator` - route resolution and history replacement
//! 5. `AppShell` - mounts the monitor for the application lifetime and
//!    applies the guard at every protected navigation

pub mod monitor;
pub mod banner;
pub mod guard;
pub mod navigation;
pub mod routes;
pub mod shell;
pub mod config;
pub mod logging;

pub use monitor::*;
pub use banner::*;
pub use guard::*;
pub use navigation::*;
pub use routes::*;
pub use shell::*;
pub use config::*;
pub use logging::init_logging;
