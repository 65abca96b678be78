use crate::embedded_session::lock_session;
use crate::{EmbedView, EmbeddedSession, MountTarget};

use std::fmt;
use std::sync::{Arc, Mutex};

use log::debug;

/// A mount target fenced to one session generation.
///
/// Every write takes the session lock and only reaches the target while the
/// generation it was created for is still the current one. Writes from a
/// superseded call are dropped and reported as `false`.
#[derive(Clone)]
pub struct MountPoint {
    generation: u64,
    session: Arc<Mutex<EmbeddedSession>>,
    target: Arc<dyn MountTarget>,
}

impl MountPoint {
    pub(crate) fn new(
        generation: u64,
        session: Arc<Mutex<EmbeddedSession>>,
        target: Arc<dyn MountTarget>,
    ) -> Self {
        Self {
            generation,
            session,
            target,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        lock_session(&self.session).generation == self.generation
    }

    pub fn clear(&self) -> bool {
        self.with_current(|_, target| target.clear())
    }

    pub fn render_view(&self, view: &EmbedView) -> bool {
        self.with_current(|_, target| target.render_view(view))
    }

    pub fn render_error(&self, message: &str) -> bool {
        self.with_current(|_, target| target.render_error(message))
    }

    /// Run `write` under the session lock if this generation is current
    pub(crate) fn with_current<F>(&self, write: F) -> bool
    where
        F: FnOnce(&mut EmbeddedSession, &dyn MountTarget),
    {
        let mut session = lock_session(&self.session);
        if session.generation != self.generation {
            debug!(
                "Dropping write from generation {} (current {})",
                self.generation, session.generation
            );
            return false;
        }
        write(&mut session, self.target.as_ref());
        true
    }
}

impl fmt::Debug for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountPoint")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
