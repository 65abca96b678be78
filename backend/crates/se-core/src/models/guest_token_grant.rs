use crate::ScopeId;

use serde::{Deserialize, Serialize};

/// Response body of `GET /scope/guest-token`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestTokenGrant {
    /// Compact HS256 credential
    pub token: String,
    /// Where the rendering engine serves the embedded view
    pub dashboard_url: String,
    pub scope_id: ScopeId,
    pub subject: String,
}
