use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid scope '{value}': {message} {location}")]
    InvalidScope {
        value: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Signing failed: {message} {location}")]
    SigningFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Signature does not match the shared secret {location}")]
    SignatureMismatch { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code used in API error bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidScope { .. } => "INVALID_SCOPE",
            Self::SigningFailure { .. } => "SIGNING_FAILURE",
            Self::SignatureMismatch { .. } => "SIGNATURE_MISMATCH",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::RateLimitExceeded { .. } => "RATE_LIMITED",
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidClaim { claim, .. } => Some(claim.clone()),
            Self::InvalidScope { .. } => Some("scopeId".to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
