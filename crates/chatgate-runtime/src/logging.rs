//! tracing subscriber setup

use tracing_subscriber::EnvFilter;

use chatgate_core::{GateError, GateResult};

use crate::LoggingConfig;

/// Install a global fmt subscriber
///
/// `RUST_LOG` takes precedence over `config.filter`. Returns `Ok(false)` if a
/// global subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> GateResult<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|e| GateError::InvalidConfig(format!("log filter: {e}")))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };
    Ok(installed)
}
