use crate::EmbedView;

/// The shared surface views are rendered into.
///
/// Implementations are called while the session lock is held, so they must
/// be synchronous and quick.
pub trait MountTarget: Send + Sync {
    /// Remove whatever is currently shown
    fn clear(&self);

    /// Replace the content with a mounted view
    fn render_view(&self, view: &EmbedView);

    /// Replace the content with an inline error message
    fn render_error(&self, message: &str);
}
