//! Client-side lifecycle of the single embedded view.
//!
//! [`SessionController`] owns one [`EmbeddedSession`] slot. Every switch bumps
//! a generation counter, and every write to the shared [`MountTarget`] goes
//! through a [`MountPoint`] fenced to the writer's generation, so a call that
//! has been overtaken can never paint over a newer view.

pub mod credential_source;
pub mod embed_handle;
pub mod embed_settings;
pub mod embed_view;
pub mod embedded_session;
pub mod embedding_toolkit;
pub mod error;
pub mod iframe_toolkit;
pub mod local_credential_source;
pub mod memory_surface;
pub mod mount_point;
pub mod mount_request;
pub mod mount_target;
pub mod remote_credential_source;
pub mod session_controller;
pub mod session_state;
pub mod switch_outcome;
pub mod token_fetcher;
pub mod ui_config;

pub use credential_source::CredentialSource;
pub use embed_handle::EmbedHandle;
pub use embed_settings::EmbedSettings;
pub use embed_view::EmbedView;
pub use embedded_session::{EmbeddedSession, SessionSnapshot};
pub use embedding_toolkit::EmbeddingToolkit;
pub use error::{Result, SessionError, ToolkitError, ToolkitResult};
pub use iframe_toolkit::{IframeHandle, IframeToolkit};
pub use local_credential_source::LocalCredentialSource;
pub use memory_surface::{MemorySurface, SurfaceContent};
pub use mount_point::MountPoint;
pub use mount_request::MountRequest;
pub use mount_target::MountTarget;
pub use remote_credential_source::RemoteCredentialSource;
pub use session_controller::SessionController;
pub use session_state::SessionState;
pub use switch_outcome::SwitchOutcome;
pub use token_fetcher::TokenFetcher;
pub use ui_config::UiConfig;

/// Pause between clearing the mount target and mounting the next view
pub const DEFAULT_REMOUNT_DELAY_MS: u64 = 100;

/// Path of the credential endpoint, relative to the server base URL
pub const GUEST_TOKEN_PATH: &str = "/scope/guest-token";

#[cfg(test)]
mod tests;
