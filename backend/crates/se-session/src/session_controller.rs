use crate::embedded_session::lock_session;
use crate::{
    CredentialSource, EmbedHandle, EmbedSettings, EmbeddedSession, EmbeddingToolkit, MountPoint,
    MountRequest, MountTarget, SessionError, SessionSnapshot, SessionState, SwitchOutcome,
    TokenFetcher,
};

use se_core::ScopeDescriptor;

use std::sync::{Arc, Mutex};

use log::{debug, error, info, warn};

/// Owns the single embedded-view slot and serialises scope switches.
///
/// Overlapping `switch_scope` calls are allowed. Each call captures a
/// generation number up front and re-checks it after every suspension point;
/// a call that has been overtaken returns [`SwitchOutcome::Superseded`]
/// without touching the session, and any handle it still receives is
/// unmounted and dropped.
pub struct SessionController {
    source: Arc<dyn CredentialSource>,
    toolkit: Arc<dyn EmbeddingToolkit>,
    target: Arc<dyn MountTarget>,
    settings: EmbedSettings,
    session: Arc<Mutex<EmbeddedSession>>,
}

impl SessionController {
    pub fn new(
        source: Arc<dyn CredentialSource>,
        toolkit: Arc<dyn EmbeddingToolkit>,
        target: Arc<dyn MountTarget>,
        settings: EmbedSettings,
    ) -> Self {
        Self {
            source,
            toolkit,
            target,
            settings,
            session: Arc::new(Mutex::new(EmbeddedSession::new())),
        }
    }

    pub fn settings(&self) -> &EmbedSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        lock_session(&self.session).snapshot()
    }

    /// Replace the embedded view with one bound to `scope`
    pub async fn switch_scope(&self, scope: ScopeDescriptor) -> SwitchOutcome {
        let scope_id = scope.id.get();

        let (mount_point, previous) = {
            let mut session = lock_session(&self.session);
            session.generation += 1;
            let previous = session.handle.take();
            session.state = if previous.is_some() {
                SessionState::Unmounting
            } else {
                SessionState::Loading
            };
            session.scope = Some(scope.clone());
            (self.mount_point(session.generation), previous)
        };
        let generation = mount_point.generation();
        info!("Switching to scope {scope_id} (generation {generation})");

        if let Some(handle) = previous {
            Self::unmount_quietly(handle.as_ref()).await;
        }

        let still_current = mount_point.with_current(|session, target| {
            target.clear();
            session.state = SessionState::Loading;
        });
        if !still_current {
            debug!("Switch to scope {scope_id} superseded after unmount");
            return SwitchOutcome::Superseded;
        }

        let grant = match self.source.fetch(&scope).await {
            Ok(grant) => grant,
            Err(err) => {
                let message = format!("Failed to load dashboard: {}", err.message());
                let applied = mount_point.with_current(|session, target| {
                    session.state = SessionState::Idle;
                    session.scope = None;
                    target.render_error(&message);
                });
                if !applied {
                    return SwitchOutcome::Superseded;
                }
                error!("{err}");
                return SwitchOutcome::Failed(err);
            }
        };

        if !mount_point.is_current() {
            debug!("Credential for scope {scope_id} arrived after a newer switch, discarding");
            return SwitchOutcome::Superseded;
        }

        if !self.settings.remount_delay.is_zero() {
            tokio::time::sleep(self.settings.remount_delay).await;
            if !mount_point.is_current() {
                return SwitchOutcome::Superseded;
            }
        }

        let request = MountRequest {
            resource_ref: self.settings.resource_ref.clone(),
            engine_url: self.settings.engine_url.clone(),
            mount_point: mount_point.clone(),
            fetch_token: TokenFetcher::from_token(grant.token),
            ui: self.settings.ui,
        };

        match self.toolkit.mount(request).await {
            Ok(handle) => {
                let late = {
                    let mut session = lock_session(&self.session);
                    if session.generation == generation {
                        session.handle = Some(handle);
                        session.state = SessionState::Mounted;
                        None
                    } else {
                        Some(handle)
                    }
                };

                match late {
                    None => {
                        info!("Scope {scope_id} mounted (generation {generation})");
                        SwitchOutcome::Mounted
                    }
                    Some(handle) => {
                        debug!("Mount for scope {scope_id} completed late, unmounting it");
                        Self::unmount_quietly(handle.as_ref()).await;
                        SwitchOutcome::Superseded
                    }
                }
            }
            Err(toolkit_err) => {
                let err = SessionError::mount(scope_id, toolkit_err.message());
                let message = format!("Failed to load dashboard: {}", err.message());
                let applied = mount_point.with_current(|session, target| {
                    session.state = SessionState::Error;
                    target.render_error(&message);
                });
                if !applied {
                    return SwitchOutcome::Superseded;
                }
                error!("{err}");
                SwitchOutcome::Failed(err)
            }
        }
    }

    /// Invalidate in-flight switches, unmount the current view and go idle
    pub async fn teardown(&self) {
        let (generation, previous) = {
            let mut session = lock_session(&self.session);
            session.generation += 1;
            let previous = session.handle.take();
            if previous.is_some() {
                session.state = SessionState::Unmounting;
            }
            (session.generation, previous)
        };

        if let Some(handle) = previous {
            Self::unmount_quietly(handle.as_ref()).await;
        }

        let cleared = self.mount_point(generation).with_current(|session, target| {
            target.clear();
            session.state = SessionState::Idle;
            session.scope = None;
        });
        if cleared {
            info!("Session torn down (generation {generation})");
        }
    }

    fn mount_point(&self, generation: u64) -> MountPoint {
        MountPoint::new(
            generation,
            Arc::clone(&self.session),
            Arc::clone(&self.target),
        )
    }

    async fn unmount_quietly(handle: &dyn EmbedHandle) {
        if let Err(e) = handle.unmount().await {
            let err = SessionError::unmount(e.message());
            warn!("{err}");
        }
    }
}
