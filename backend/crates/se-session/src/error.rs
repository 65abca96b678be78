use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures observed by the session controller.
///
/// None of these escape `switch_scope`; they end up in a
/// [`crate::SwitchOutcome::Failed`] or in a `warn` log line.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Credential fetch failed for scope {scope_id}: {message} {location}")]
    CredentialFetch {
        scope_id: i64,
        message: String,
        location: ErrorLocation,
    },

    #[error("Mount failed for scope {scope_id}: {message} {location}")]
    Mount {
        scope_id: i64,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unmount failed: {message} {location}")]
    Unmount {
        message: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn credential_fetch(scope_id: i64, message: impl Into<String>) -> Self {
        Self::CredentialFetch {
            scope_id,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn mount(scope_id: i64, message: impl Into<String>) -> Self {
        Self::Mount {
            scope_id,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unmount(message: impl Into<String>) -> Self {
        Self::Unmount {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Human-readable cause, without the source location
    pub fn message(&self) -> &str {
        match self {
            Self::CredentialFetch { message, .. }
            | Self::Mount { message, .. }
            | Self::Unmount { message, .. } => message,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CredentialFetch { .. } => "CREDENTIAL_FETCH_FAILED",
            Self::Mount { .. } => "MOUNT_FAILED",
            Self::Unmount { .. } => "UNMOUNT_FAILED",
        }
    }
}

/// Failures reported by an embedding toolkit or one of its handles
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Token fetch failed: {message} {location}")]
    TokenFetch {
        message: String,
        location: ErrorLocation,
    },

    #[error("Toolkit rejected the request: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },
}

impl ToolkitError {
    #[track_caller]
    pub fn token_fetch(message: impl Into<String>) -> Self {
        Self::TokenFetch {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::TokenFetch { message, .. } | Self::Rejected { message, .. } => message,
        }
    }
}

pub type Result<T> = StdResult<T, SessionError>;
pub type ToolkitResult<T> = StdResult<T, ToolkitError>;
