use crate::{EmbedView, MountTarget};

use std::sync::{Mutex, PoisonError};

/// What a [`MemorySurface`] currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceContent {
    Empty,
    View(EmbedView),
    Error(String),
}

/// In-process mount target that keeps the current content and a write count
pub struct MemorySurface {
    inner: Mutex<SurfaceInner>,
}

struct SurfaceInner {
    content: SurfaceContent,
    writes: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SurfaceInner {
                content: SurfaceContent::Empty,
                writes: 0,
            }),
        }
    }

    pub fn content(&self) -> SurfaceContent {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .content
            .clone()
    }

    /// Number of writes that reached the surface
    pub fn writes(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .writes
    }

    fn replace(&self, content: SurfaceContent) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.content = content;
        inner.writes += 1;
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MountTarget for MemorySurface {
    fn clear(&self) {
        self.replace(SurfaceContent::Empty);
    }

    fn render_view(&self, view: &EmbedView) {
        self.replace(SurfaceContent::View(view.clone()));
    }

    fn render_error(&self, message: &str) {
        self.replace(SurfaceContent::Error(message.to_string()));
    }
}
