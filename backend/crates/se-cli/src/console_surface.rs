use se_session::{EmbedView, MountTarget};

/// Mount target that narrates every write on stderr, keeping stdout for JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSurface;

impl ConsoleSurface {
    pub fn new() -> Self {
        Self
    }
}

impl MountTarget for ConsoleSurface {
    fn clear(&self) {
        eprintln!("[surface] cleared");
    }

    fn render_view(&self, view: &EmbedView) {
        eprintln!("[surface] frame {}", view.src);
    }

    fn render_error(&self, message: &str) {
        eprintln!("[surface] {}", message);
    }
}
