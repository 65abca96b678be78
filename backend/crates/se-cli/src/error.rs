use crate::ClientError;

use thiserror::Error;

/// Anything a CLI command can fail with
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("Config error: {0}")]
    Config(#[from] se_config::ConfigError),

    #[error("Credential rejected: {0}")]
    Auth(#[from] se_auth::AuthError),

    #[error("{0}")]
    Scope(#[from] se_core::CoreError),

    #[error("{message}")]
    Usage { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
