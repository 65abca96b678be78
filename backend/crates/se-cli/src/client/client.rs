use crate::{CliClientResult, ClientError};

use se_core::ScopeEntry;
use se_session::GUEST_TOKEN_PATH;

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Url};
use serde_json::Value;

/// HTTP client for the se-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3001")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Build a URL under the base URL, percent-encoding the query parameters
    #[track_caller]
    pub(crate) fn url(&self, path: &str, params: &[(&str, &str)]) -> CliClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let parsed = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        parsed.map_err(|_| ClientError::Url {
            url: raw.clone(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// GET a JSON document, turning error envelopes into `ClientError::Api`
    async fn get(&self, url: Url) -> CliClientResult<Value> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&bytes)?);
        }

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

        Err(ClientError::api(status, code, message))
    }

    /// List the scope directory
    pub async fn list_scopes(&self) -> CliClientResult<Value> {
        let url = self.url("/scopes", &[])?;
        self.get(url).await
    }

    /// List the scope directory as typed entries
    pub async fn scope_entries(&self) -> CliClientResult<Vec<ScopeEntry>> {
        let value = self.list_scopes().await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch a guest credential grant for one scope
    pub async fn guest_token(
        &self,
        scope_id: &str,
        subject: Option<&str>,
    ) -> CliClientResult<Value> {
        let mut params = vec![("scopeId", scope_id)];
        if let Some(subject) = subject {
            params.push(("subject", subject));
        }
        let url = self.url(GUEST_TOKEN_PATH, &params)?;
        self.get(url).await
    }
}
