//! Route table
//!
//! Default table:
//! - `""` - entry room (public)
//! - `room` - chat room (protected)
//! - anything else - not found

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use chatgate_core::{GateError, GateResult};

pub const VIEW_ENTRY_ROOM: &str = "entry_room";
pub const VIEW_CHAT_ROOM: &str = "chat_room";

/// One navigable path
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub path: String,
    /// View rendered by presentation
    pub view: String,
    /// Guarded by the access guard
    #[serde(default)]
    pub protected: bool,
}

impl RouteConfig {
    pub fn public(path: &str, view: &str) -> Self {
        RouteConfig {
            path: path.to_string(),
            view: view.to_string(),
            protected: false,
        }
    }

    pub fn protected(path: &str, view: &str) -> Self {
        RouteConfig {
            protected: true,
            ..Self::public(path, view)
        }
    }
}

/// The entry page and the guarded chat room
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::public("", VIEW_ENTRY_ROOM),
        RouteConfig::protected("room", VIEW_CHAT_ROOM),
    ]
}

/// Strip leading and trailing slashes: `/room/` and `room` are the same route
pub fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// Resolved navigation outcome
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Render the named view
    Render(String),
    /// Access refused; history was replaced with this path
    Redirect(String),
    /// No route matched
    NotFound,
}

/// Validated, normalized set of routes
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteConfig>,
}

impl RouteTable {
    /// Build a table. Fails on duplicate paths (after normalization).
    pub fn new(routes: Vec<RouteConfig>) -> GateResult<Self> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(routes.len());
        for mut route in routes {
            route.path = normalize_path(&route.path).to_string();
            if !seen.insert(route.path.clone()) {
                return Err(GateError::InvalidConfig(format!(
                    "duplicate route path {:?}",
                    route.path
                )));
            }
            normalized.push(route);
        }
        Ok(RouteTable { routes: normalized })
    }

    /// Find the route for `path`
    pub fn resolve(&self, path: &str) -> Option<&RouteConfig> {
        let path = normalize_path(path);
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn routes(&self) -> &[RouteConfig] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        RouteTable {
            routes: default_routes(),
        }
    }
}
