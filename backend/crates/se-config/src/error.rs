use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A setting failed validation; `section` is the TOML table it lives in
    #[error("Invalid [{section}] setting: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::invalid("auth", message)
    }

    #[track_caller]
    pub fn embed(message: impl Into<String>) -> Self {
        Self::invalid("embed", message)
    }

    #[track_caller]
    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::invalid("rate_limit", message)
    }

    #[track_caller]
    pub fn scope(message: impl Into<String>) -> Self {
        Self::invalid("scopes", message)
    }

    #[track_caller]
    pub fn server(message: impl Into<String>) -> Self {
        Self::invalid("server", message)
    }

    #[track_caller]
    pub fn session(message: impl Into<String>) -> Self {
        Self::invalid("session", message)
    }

    /// The TOML table the failing setting belongs to, if any
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { section, .. } => Some(section),
            Self::Io { .. } | Self::Toml { .. } => None,
        }
    }

    #[track_caller]
    fn invalid(section: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
