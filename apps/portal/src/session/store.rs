use parking_lot::RwLock;

use crate::auth::UnverifiedClaims;

/// What the client currently believes about the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<UnverifiedClaims>,
    pub token: Option<String>,
}

/// Shared client state, injected into whatever needs the current user.
pub trait SessionStore {
    fn state(&self) -> SessionSnapshot;
    fn set_state(&self, next: SessionSnapshot);

    /// Forget the user and token, as on logout.
    fn clear(&self) {
        self.set_state(SessionSnapshot::default());
    }
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: RwLock<SessionSnapshot>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            inner: RwLock::new(snapshot),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn state(&self) -> SessionSnapshot {
        self.inner.read().clone()
    }

    fn set_state(&self, next: SessionSnapshot) {
        *self.inner.write() = next;
    }
}
