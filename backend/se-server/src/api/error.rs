//! REST API error types
//!
//! These errors produce consistent JSON responses of the form
//! `{ "error": { "code", "message", "field" } }`.

use se_auth::AuthError;
use se_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Query parameter carrying the tenant identifier
pub const SCOPE_ID_FIELD: &str = "scopeId";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "INVALID_SCOPE", "RATE_LIMITED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Offending request parameter, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed scope identifier (400)
    #[error("Invalid scope: {message} {location}")]
    InvalidScope {
        message: String,
        location: ErrorLocation,
    },

    /// Issuance throttled (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Credential could not be signed (500)
    #[error("Signing failed: {message} {location}")]
    SigningFailure {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidScope { .. } => StatusCode::BAD_REQUEST,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::SigningFailure { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::InvalidScope { message, .. } => ApiErrorBody {
                code: "INVALID_SCOPE".into(),
                message,
                field: Some(SCOPE_ID_FIELD.into()),
            },
            ApiError::RateLimited { message, .. } => ApiErrorBody {
                code: "RATE_LIMITED".into(),
                message,
                field: None,
            },
            // Signing details stay in the log
            ApiError::SigningFailure { .. } => ApiErrorBody {
                code: "SIGNING_FAILURE".into(),
                message: "Failed to sign guest credential".into(),
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert scope parsing errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidScope { value, message, .. } => ApiError::InvalidScope {
                message: format!("'{}': {}", value, message),
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::Internal {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert issuer errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidScope { value, message, .. } => ApiError::InvalidScope {
                message: format!("'{}': {}", value, message),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::RateLimited {
                message: format!(
                    "Too many credential requests: limit is {} per {}s",
                    limit, window_secs
                ),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::SigningFailure { message, .. } => ApiError::SigningFailure {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::Internal {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
