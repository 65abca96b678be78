use crate::{CliResult, Client};

use se_core::{ScopeDescriptor, ScopeId};
use se_session::{SessionController, SessionSnapshot, SwitchOutcome};

use futures::future::join_all;
use serde::Serialize;

/// How a batch of switch requests is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchMode {
    /// Each switch completes before the next starts
    Sequential,
    /// All switches start together; only the last one should stay mounted
    Concurrent,
}

/// One line of the switch report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchRecord {
    pub scope_id: i64,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SwitchRecord {
    pub(crate) fn new(scope: &ScopeDescriptor, outcome: &SwitchOutcome) -> Self {
        Self {
            scope_id: scope.id.get(),
            outcome: outcome.label(),
            code: outcome.error().map(|e| e.error_code()),
            error: outcome.error().map(|e| e.message().to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SwitchReport {
    pub outcomes: Vec<SwitchRecord>,
    pub session: SessionSnapshot,
}

/// Turn requested ids into descriptors, naming them from the server's directory
pub async fn resolve_scopes(client: &Client, ids: &[i64]) -> CliResult<Vec<ScopeDescriptor>> {
    let entries = client.scope_entries().await?;

    ids.iter()
        .map(|&raw| -> CliResult<ScopeDescriptor> {
            let id = ScopeId::new(raw)?;
            let name = entries
                .iter()
                .find(|entry| entry.id == id)
                .map(|entry| entry.display_name.clone())
                .unwrap_or_else(|| format!("Scope {id}"));
            Ok(ScopeDescriptor::new(id, name))
        })
        .collect()
}

/// Run every switch through the controller and report what happened
pub async fn drive_switches(
    controller: &SessionController,
    scopes: Vec<ScopeDescriptor>,
    mode: SwitchMode,
) -> SwitchReport {
    let outcomes = match mode {
        SwitchMode::Sequential => {
            let mut outcomes = Vec::with_capacity(scopes.len());
            for scope in &scopes {
                outcomes.push(controller.switch_scope(scope.clone()).await);
            }
            outcomes
        }
        SwitchMode::Concurrent => {
            join_all(scopes.iter().map(|scope| controller.switch_scope(scope.clone()))).await
        }
    };

    SwitchReport {
        outcomes: scopes
            .iter()
            .zip(outcomes.iter())
            .map(|(scope, outcome)| SwitchRecord::new(scope, outcome))
            .collect(),
        session: controller.snapshot(),
    }
}
