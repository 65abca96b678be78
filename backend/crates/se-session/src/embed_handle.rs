use crate::ToolkitResult;

use async_trait::async_trait;

/// Handle to a mounted view; the only operation is tearing it down
#[async_trait]
pub trait EmbedHandle: Send + Sync {
    async fn unmount(&self) -> ToolkitResult<()>;
}
