use crate::Result as SessionResult;

use se_core::{GuestTokenGrant, ScopeDescriptor};

use async_trait::async_trait;

/// Where the controller obtains a fresh credential for each switch
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn fetch(&self, scope: &ScopeDescriptor) -> SessionResult<GuestTokenGrant>;
}
