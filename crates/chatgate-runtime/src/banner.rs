//! Connection-lost banner view model
//!
//! Presentation renders a `Banner` exactly while the monitor is degraded.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use chatgate_core::ConnectivityState;
use chatgate_transport::Transport;

pub const DEFAULT_BANNER_MESSAGE: &str =
    "Connection lost. Please check your network or click Retry.";
pub const DEFAULT_RETRY_LABEL: &str = "Retry";

/// User-facing banner copy
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerText {
    pub message: String,
    pub retry_label: String,
}

impl Default for BannerText {
    fn default() -> Self {
        BannerText {
            message: DEFAULT_BANNER_MESSAGE.to_string(),
            retry_label: DEFAULT_RETRY_LABEL.to_string(),
        }
    }
}

/// Reconnect request bound to the shared transport
#[derive(Clone)]
pub struct RetryAction {
    transport: Arc<dyn Transport>,
}

impl RetryAction {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        RetryAction { transport }
    }

    /// Forward a reconnect request. Returns immediately.
    pub fn invoke(&self) {
        tracing::debug!("Reconnect requested");
        self.transport.connect();
    }
}

impl fmt::Debug for RetryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryAction").finish_non_exhaustive()
    }
}

/// Alert shown while the transport is degraded
#[derive(Clone, Debug)]
pub struct Banner {
    pub message: String,
    pub retry_label: String,
    /// Always `"alert"`
    pub role: &'static str,
    /// ARIA live-region politeness, always `"assertive"`
    pub live: &'static str,
    retry: RetryAction,
}

impl Banner {
    /// Build the banner for `state`, or `None` while healthy
    pub fn for_state(
        state: ConnectivityState,
        text: &BannerText,
        retry: RetryAction,
    ) -> Option<Banner> {
        if !state.shows_banner() {
            return None;
        }
        Some(Banner {
            message: text.message.clone(),
            retry_label: text.retry_label.clone(),
            role: "alert",
            live: "assertive",
            retry,
        })
    }

    /// The retry control was activated
    pub fn retry(&self) {
        self.retry.invoke();
    }

    /// Bound callable for the retry control
    pub fn retry_action(&self) -> RetryAction {
        self.retry.clone()
    }
}
