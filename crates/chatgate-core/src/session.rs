//! Session snapshots and the session store capability
//!
//! chatgate only ever reads sessions. How identity and room membership get
//! populated is up to whoever owns the store.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Client-held record of the current user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    /// Email-like identifier
    pub identity: Option<String>,
    /// Room the user has joined
    pub room_membership: Option<String>,
}

impl Session {
    /// Create an empty (anonymous) session
    pub fn new() -> Self {
        Self::default()
    }

    /// Set identity
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Set room membership
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room_membership = Some(room.into());
        self
    }

    /// Identity, treating an empty string as absent
    pub fn identity(&self) -> Option<&str> {
        present(&self.identity)
    }

    /// Room membership, treating an empty string as absent
    pub fn room(&self) -> Option<&str> {
        present(&self.room_membership)
    }

    /// INVARIANT: authorized iff both identity and room are present and non-empty
    pub fn is_authorized(&self) -> bool {
        self.identity().is_some() && self.room().is_some()
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Read-only access to the current session
pub trait SessionStore: Send + Sync {
    /// Snapshot of the session as it is right now
    fn snapshot(&self) -> Session;
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn snapshot(&self) -> Session {
        (**self).snapshot()
    }
}

/// In-memory session store
///
/// The write methods belong to the owner of the session (entry page, room
/// page); the guard only calls [`SessionStore::snapshot`].
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Session>,
}

impl MemorySessionStore {
    /// Create a store holding an initial session
    pub fn new(session: Session) -> Self {
        MemorySessionStore {
            session: RwLock::new(session),
        }
    }

    /// Replace the session
    pub fn set(&self, session: Session) {
        *self.session.write() = session;
    }

    /// Mutate the session in place
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Session),
    {
        f(&mut self.session.write());
    }

    /// Forget identity and room (e.g. the user left)
    pub fn clear(&self) {
        self.set(Session::default());
    }
}

impl SessionStore for MemorySessionStore {
    fn snapshot(&self) -> Session {
        self.session.read().clone()
    }
}
