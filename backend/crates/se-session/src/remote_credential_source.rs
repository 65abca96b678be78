use crate::{CredentialSource, GUEST_TOKEN_PATH, Result as SessionResult, SessionError};

use se_core::{GuestTokenGrant, ScopeDescriptor};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Url};
use serde_json::Value;

/// Fetches credentials from a running server's `GET /scope/guest-token`
pub struct RemoteCredentialSource {
    base_url: String,
    subject: Option<String>,
    client: ReqwestClient,
}

impl RemoteCredentialSource {
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3001")
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, ReqwestClient::new())
    }

    pub fn with_client(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            subject: None,
            client,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn grant_url(&self, scope_id: i64) -> SessionResult<Url> {
        let mut params = vec![("scopeId", scope_id.to_string())];
        if let Some(ref subject) = self.subject {
            params.push(("subject", subject.clone()));
        }

        Url::parse_with_params(&format!("{}{}", self.base_url, GUEST_TOKEN_PATH), &params)
            .map_err(|e| SessionError::credential_fetch(scope_id, format!("invalid server URL: {e}")))
    }
}

#[async_trait]
impl CredentialSource for RemoteCredentialSource {
    async fn fetch(&self, scope: &ScopeDescriptor) -> SessionResult<GuestTokenGrant> {
        let scope_id = scope.id.get();
        let url = self.grant_url(scope_id)?;
        debug!("Requesting guest credential for scope {scope_id}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SessionError::credential_fetch(scope_id, e.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SessionError::credential_fetch(scope_id, e.to_string()))?;

        if !status.is_success() {
            // Proxies in front of the server may answer with plain text
            let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            let error = &body["error"];
            let code = error["code"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()));
            let message = error["message"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| String::from_utf8_lossy(&bytes).trim().to_string());
            return Err(SessionError::credential_fetch(
                scope_id,
                format!("{code} ({}): {message}", status.as_u16()),
            ));
        }

        let grant: GuestTokenGrant = serde_json::from_slice(&bytes)
            .map_err(|e| SessionError::credential_fetch(scope_id, e.to_string()))?;

        if grant.scope_id != scope.id {
            return Err(SessionError::credential_fetch(
                scope_id,
                format!("server returned a credential for scope {}", grant.scope_id),
            ));
        }

        Ok(grant)
    }
}
