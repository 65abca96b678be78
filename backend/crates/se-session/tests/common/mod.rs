//! Scripted credential source and toolkit whose calls can be held open

#![allow(dead_code)]

use se_core::{GuestTokenGrant, ScopeDescriptor, ScopeId};
use se_session::{
    CredentialSource, EmbedHandle, EmbedSettings, EmbedView, EmbeddingToolkit, MemorySurface,
    MountPoint, MountRequest, Result as SessionResult, SessionController, SessionError,
    ToolkitError, ToolkitResult,
};

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Notify, mpsc};

pub const WAIT: Duration = Duration::from_secs(5);

pub fn scope(id: i64) -> ScopeDescriptor {
    ScopeDescriptor::new(ScopeId::new(id).unwrap(), format!("Scope {id}"))
}

pub fn token_for(id: i64) -> String {
    format!("token-{id}")
}

pub fn settings() -> EmbedSettings {
    EmbedSettings::new("http://engine:8088", "res-1").with_remount_delay(Duration::ZERO)
}

/// Credential source answering `token-{id}`, optionally failing or blocking per scope
pub struct ScriptedSource {
    failing: HashSet<i64>,
    gates: HashMap<i64, Arc<Notify>>,
    started: mpsc::UnboundedSender<i64>,
}

impl ScriptedSource {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<i64>) {
        let (started, rx) = mpsc::unbounded_channel();
        (
            Self {
                failing: HashSet::new(),
                gates: HashMap::new(),
                started,
            },
            rx,
        )
    }

    pub fn fail_for(mut self, id: i64) -> Self {
        self.failing.insert(id);
        self
    }

    /// Hold fetches for `id` until the returned gate is notified
    pub fn gate_for(&mut self, id: i64) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.insert(id, Arc::clone(&gate));
        gate
    }
}

#[async_trait]
impl CredentialSource for ScriptedSource {
    async fn fetch(&self, scope: &ScopeDescriptor) -> SessionResult<GuestTokenGrant> {
        let id = scope.id.get();
        let _ = self.started.send(id);

        if let Some(gate) = self.gates.get(&id) {
            gate.notified().await;
        }

        if self.failing.contains(&id) {
            return Err(SessionError::credential_fetch(id, "backend unavailable"));
        }

        Ok(GuestTokenGrant {
            token: token_for(id),
            dashboard_url: "http://engine:8088/dashboard/1/embedded".to_string(),
            scope_id: scope.id,
            subject: format!("scope-{id}-user"),
        })
    }
}

/// Shared record of what the scripted toolkit did
#[derive(Default)]
pub struct ToolkitLog {
    pub mounted: Mutex<Vec<String>>,
    pub unmounted: Mutex<Vec<String>>,
}

impl ToolkitLog {
    pub fn mounted(&self) -> Vec<String> {
        self.mounted.lock().unwrap().clone()
    }

    pub fn unmounted(&self) -> Vec<String> {
        self.unmounted.lock().unwrap().clone()
    }
}

/// Toolkit that paints `EmbedView`s keyed by token, with optional delays and failures
pub struct ScriptedToolkit {
    gates: HashMap<String, Arc<Notify>>,
    failing_mounts: HashSet<String>,
    fail_unmount: bool,
    started: mpsc::UnboundedSender<String>,
    log: Arc<ToolkitLog>,
}

impl ScriptedToolkit {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>, Arc<ToolkitLog>) {
        let (started, rx) = mpsc::unbounded_channel();
        let log = Arc::new(ToolkitLog::default());
        (
            Self {
                gates: HashMap::new(),
                failing_mounts: HashSet::new(),
                fail_unmount: false,
                started,
                log: Arc::clone(&log),
            },
            rx,
            log,
        )
    }

    pub fn gate_for(&mut self, token: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.insert(token.to_string(), Arc::clone(&gate));
        gate
    }

    pub fn fail_mount_for(mut self, token: &str) -> Self {
        self.failing_mounts.insert(token.to_string());
        self
    }

    pub fn fail_every_unmount(mut self) -> Self {
        self.fail_unmount = true;
        self
    }
}

#[async_trait]
impl EmbeddingToolkit for ScriptedToolkit {
    async fn mount(&self, request: MountRequest) -> ToolkitResult<Box<dyn EmbedHandle>> {
        let token = request.fetch_token.fetch().await?;
        let _ = self.started.send(token.clone());

        if let Some(gate) = self.gates.get(&token) {
            gate.notified().await;
        }

        if self.failing_mounts.contains(&token) {
            return Err(ToolkitError::rejected(format!("engine refused {token}")));
        }

        let view = EmbedView::new(
            &request.engine_url,
            &request.resource_ref,
            request.ui,
            token.clone(),
        );
        request.mount_point.render_view(&view);
        self.log.mounted.lock().unwrap().push(token.clone());

        Ok(Box::new(ScriptedHandle {
            token,
            mount_point: request.mount_point,
            fail_unmount: self.fail_unmount,
            log: Arc::clone(&self.log),
        }))
    }
}

pub struct ScriptedHandle {
    token: String,
    mount_point: MountPoint,
    fail_unmount: bool,
    log: Arc<ToolkitLog>,
}

#[async_trait]
impl EmbedHandle for ScriptedHandle {
    async fn unmount(&self) -> ToolkitResult<()> {
        self.log.unmounted.lock().unwrap().push(self.token.clone());
        if self.fail_unmount {
            return Err(ToolkitError::rejected("frame already detached"));
        }
        self.mount_point.clear();
        Ok(())
    }
}

pub fn controller(
    source: ScriptedSource,
    toolkit: ScriptedToolkit,
    surface: &Arc<MemorySurface>,
) -> Arc<SessionController> {
    Arc::new(SessionController::new(
        Arc::new(source),
        Arc::new(toolkit),
        surface.clone(),
        settings(),
    ))
}
