use crate::{CredentialSource, Result as SessionResult, SessionError};

use se_auth::{CredentialIssuer, resolve_subject};
use se_core::{GuestTokenGrant, ScopeDescriptor};

use std::sync::Arc;

use async_trait::async_trait;

/// Issues credentials in-process with a shared [`CredentialIssuer`]
pub struct LocalCredentialSource {
    issuer: Arc<CredentialIssuer>,
    dashboard_url: String,
    subject: Option<String>,
}

impl LocalCredentialSource {
    pub fn new(issuer: Arc<CredentialIssuer>, dashboard_url: impl Into<String>) -> Self {
        Self {
            issuer,
            dashboard_url: dashboard_url.into(),
            subject: None,
        }
    }

    /// Use a fixed subject name instead of the per-scope placeholder
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

#[async_trait]
impl CredentialSource for LocalCredentialSource {
    async fn fetch(&self, scope: &ScopeDescriptor) -> SessionResult<GuestTokenGrant> {
        let subject = resolve_subject(scope.id, self.subject.as_deref());
        let token = self
            .issuer
            .issue(scope.id.get(), Some(&subject))
            .map_err(|e| SessionError::credential_fetch(scope.id.get(), e.to_string()))?;

        Ok(GuestTokenGrant {
            token,
            dashboard_url: self.dashboard_url.clone(),
            scope_id: scope.id,
            subject,
        })
    }
}
