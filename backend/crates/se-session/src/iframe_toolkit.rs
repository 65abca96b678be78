use crate::{
    EmbedHandle, EmbedView, EmbeddingToolkit, MountPoint, MountRequest, ToolkitError,
    ToolkitResult,
};

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use log::debug;

/// Renders the engine's embedded page as a frame descriptor.
///
/// This is the Rust-side stand-in for the engine's browser SDK: it asks the
/// token fetcher for the credential, builds the frame source and paints it
/// through the fenced mount point.
#[derive(Debug, Default, Clone, Copy)]
pub struct IframeToolkit;

impl IframeToolkit {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmbeddingToolkit for IframeToolkit {
    async fn mount(&self, request: MountRequest) -> ToolkitResult<Box<dyn EmbedHandle>> {
        if request.resource_ref.trim().is_empty() {
            return Err(ToolkitError::rejected("resource reference is empty"));
        }

        let token = request.fetch_token.fetch().await?;
        if token.trim().is_empty() {
            return Err(ToolkitError::token_fetch("token fetcher returned an empty credential"));
        }

        let view = EmbedView::new(&request.engine_url, &request.resource_ref, request.ui, token);
        if !request.mount_point.render_view(&view) {
            debug!(
                "Frame for generation {} not painted, a newer switch owns the target",
                request.mount_point.generation()
            );
        }

        Ok(Box::new(IframeHandle::new(request.mount_point)))
    }
}

/// Handle to a frame painted by [`IframeToolkit`]
pub struct IframeHandle {
    mount_point: MountPoint,
    unmounted: AtomicBool,
}

impl IframeHandle {
    fn new(mount_point: MountPoint) -> Self {
        Self {
            mount_point,
            unmounted: AtomicBool::new(false),
        }
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbedHandle for IframeHandle {
    async fn unmount(&self) -> ToolkitResult<()> {
        if self.unmounted.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        // Only clears if no newer generation has taken the target over.
        self.mount_point.clear();
        Ok(())
    }
}
