use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the se-server REST API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request to se-server failed: {source} {location}")]
    Transport {
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("se-server rejected the request with {status}: {message} (code: {code}) {location}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected response body: {source} {location}")]
    Decode {
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid server URL '{url}' {location}")]
    Url {
        url: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn api(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The server's error code, when it answered at all
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Issuance was throttled; retrying later may succeed
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS)
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Transport {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Decode {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
