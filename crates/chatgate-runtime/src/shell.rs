//! Application shell - composition root
//!
//! Mounts the connection monitor for the shell's lifetime and runs every
//! navigation into a protected route through the access guard.

use std::sync::Arc;

use chatgate_core::{AccessDecision, GateResult, SessionStore};
use chatgate_transport::Transport;

use crate::{
    normalize_path, AccessGuard, Banner, ConnectionMonitor, Navigator, Outcome, RouteTable,
    ShellConfig, Subscription,
};

/// Mounted application shell
pub struct AppShell<S> {
    config: ShellConfig,
    routes: RouteTable,
    monitor: ConnectionMonitor,
    guard: AccessGuard<S>,
    // Dropped with the shell, which detaches the monitor.
    subscription: Option<Subscription>,
}

impl<S: SessionStore> AppShell<S> {
    /// Validate `config`, then attach a monitor to `transport`
    pub fn mount(
        config: ShellConfig,
        transport: Arc<dyn Transport>,
        store: S,
    ) -> GateResult<Self> {
        config.validate()?;
        let routes = config.route_table()?;

        let monitor = ConnectionMonitor::new(transport);
        let subscription = monitor.attach()?;
        // Redirect targets land in history, so they share the route spelling.
        let guard = AccessGuard::new(store, normalize_path(&config.fallback_path));

        tracing::info!(routes = routes.routes().len(), "Application shell mounted");
        Ok(AppShell {
            config,
            routes,
            monitor,
            guard,
            subscription: Some(subscription),
        })
    }

    /// Navigate to `path`
    ///
    /// Pushes the requested path, then resolves it. A refused protected
    /// route is replaced by the fallback path in `navigator`.
    pub fn navigate(&self, path: &str, navigator: &dyn Navigator) -> Outcome {
        let path = normalize_path(path);
        navigator.push(path);

        let Some(route) = self.routes.resolve(path) else {
            tracing::debug!(path, "No route matched");
            return Outcome::NotFound;
        };

        if !route.protected {
            return Outcome::Render(route.view.clone());
        }

        match self.guard.enter(navigator) {
            AccessDecision::Render => Outcome::Render(route.view.clone()),
            AccessDecision::RedirectTo(target) => Outcome::Redirect(target),
        }
    }

    /// Banner to render, or `None` while healthy
    pub fn banner(&self) -> Option<Banner> {
        self.monitor.banner(&self.config.banner)
    }

    pub fn monitor(&self) -> &ConnectionMonitor {
        &self.monitor
    }

    pub fn guard(&self) -> &AccessGuard<S> {
        &self.guard
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Detach from the transport and tear the shell down
    pub fn unmount(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
        }
        tracing::info!("Application shell unmounted");
    }
}
