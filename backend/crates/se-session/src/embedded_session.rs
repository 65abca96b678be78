use crate::{EmbedHandle, SessionState};

use se_core::ScopeDescriptor;

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

/// The single embedded-view slot owned by a `SessionController`.
///
/// The credential itself is never stored here: it moves into the token
/// fetcher handed to the toolkit.
pub struct EmbeddedSession {
    pub generation: u64,
    /// Scope being loaded or shown; cleared when its credential cannot be fetched
    pub scope: Option<ScopeDescriptor>,
    pub state: SessionState,
    pub handle: Option<Box<dyn EmbedHandle>>,
}

impl EmbeddedSession {
    pub fn new() -> Self {
        Self {
            generation: 0,
            scope: None,
            state: SessionState::Idle,
            handle: None,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            generation: self.generation,
            state: self.state,
            scope: self.scope.clone(),
        }
    }
}

impl Default for EmbeddedSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of the session, for observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub generation: u64,
    pub state: SessionState,
    pub scope: Option<ScopeDescriptor>,
}

/// Lock the session, recovering the data if a previous holder panicked.
/// The guard must never be held across an `.await`.
pub(crate) fn lock_session(session: &Mutex<EmbeddedSession>) -> MutexGuard<'_, EmbeddedSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}
