pub mod credential_issuer;
pub mod credential_verifier;
pub mod error;
pub mod guest_claims;
pub mod issuance_rate_limiter;
pub mod issuer_settings;
pub mod rate_limit_config;
pub mod row_filter;

pub use credential_issuer::{CredentialIssuer, resolve_subject};
pub use credential_verifier::CredentialVerifier;
pub use error::{AuthError, Result};
pub use guest_claims::{GuestClaims, GuestExtra, GuestResource, GuestUser, RowLevelRule};
pub use issuance_rate_limiter::IssuanceRateLimiter;
pub use issuer_settings::IssuerSettings;
pub use rate_limit_config::RateLimitConfig;
pub use row_filter::RowFilter;

/// Lifetime of every guest credential
pub const GUEST_TOKEN_TTL_SECS: i64 = 86_400;
/// Value of the `type` claim
pub const TOKEN_TYPE_GUEST: &str = "guest";
/// Resource kind the credential grants access to
pub const RESOURCE_TYPE_DASHBOARD: &str = "dashboard";

#[cfg(test)]
mod tests;
