use crate::{EmbedHandle, MountRequest, ToolkitResult};

use async_trait::async_trait;

/// Renders an embedded view into a mount point
#[async_trait]
pub trait EmbeddingToolkit: Send + Sync {
    async fn mount(&self, request: MountRequest) -> ToolkitResult<Box<dyn EmbedHandle>>;
}
