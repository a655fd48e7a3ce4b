//! Shell configuration

use serde::{Deserialize, Serialize};

use chatgate_core::{GateError, GateResult};

use crate::{default_routes, BannerText, RouteConfig, RouteTable};

/// Logging configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Application shell configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Where unauthorized visitors of protected routes are sent
    pub fallback_path: String,
    pub banner: BannerText,
    pub routes: Vec<RouteConfig>,
    pub logging: LoggingConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            fallback_path: String::new(),
            banner: BannerText::default(),
            routes: default_routes(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> GateResult<Self> {
        let config: ShellConfig =
            serde_json::from_str(json).map_err(|e| GateError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that routes are unique and the fallback resolves to a public route
    pub fn validate(&self) -> GateResult<()> {
        let table = self.route_table()?;
        match table.resolve(&self.fallback_path) {
            Some(route) if route.protected => Err(GateError::InvalidConfig(format!(
                "fallback path {:?} is itself protected",
                self.fallback_path
            ))),
            _ => Ok(()),
        }
    }

    pub fn route_table(&self) -> GateResult<RouteTable> {
        RouteTable::new(self.routes.clone())
    }
}
