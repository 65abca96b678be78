use crate::{MountPoint, TokenFetcher, UiConfig};

/// Everything an [`crate::EmbeddingToolkit`] needs to mount one view
#[derive(Debug, Clone)]
pub struct MountRequest {
    pub resource_ref: String,
    pub engine_url: String,
    pub mount_point: MountPoint,
    pub fetch_token: TokenFetcher,
    pub ui: UiConfig,
}
