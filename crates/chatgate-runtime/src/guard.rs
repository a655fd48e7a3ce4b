//! Access guard for protected regions

use chatgate_core::{evaluate, AccessDecision, SessionStore};

use crate::Navigator;

/// Authorizes navigation into a protected region against a session store
///
/// The decision is recomputed from a fresh snapshot on every call; the guard
/// holds no session state of its own.
pub struct AccessGuard<S> {
    store: S,
    fallback_path: String,
}

impl<S: SessionStore> AccessGuard<S> {
    pub fn new(store: S, fallback_path: impl Into<String>) -> Self {
        AccessGuard {
            store,
            fallback_path: fallback_path.into(),
        }
    }

    /// Decide for the current session
    pub fn evaluate(&self) -> AccessDecision {
        evaluate(&self.store.snapshot(), &self.fallback_path)
    }

    /// Decide, and carry out a redirect through `navigator` if refused
    pub fn enter(&self, navigator: &dyn Navigator) -> AccessDecision {
        let decision = self.evaluate();
        if let AccessDecision::RedirectTo(path) = &decision {
            tracing::debug!(from = %navigator.current(), to = %path, "Access denied, redirecting");
            navigator.replace(path);
        }
        decision
    }

    pub fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
