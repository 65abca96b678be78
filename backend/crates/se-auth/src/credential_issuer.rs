use crate::{AuthError, GuestClaims, IssuerSettings, Result as AuthErrorResult};

use se_core::ScopeId;

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use log::debug;

/// Mints guest credentials bound to exactly one scope
pub struct CredentialIssuer {
    encoding_key: EncodingKey,
    header: Header,
    audience: String,
    resource_ref: String,
}

impl CredentialIssuer {
    /// Create an HS256 issuer. An empty secret, audience or resource
    /// reference is a configuration error.
    #[track_caller]
    pub fn new(settings: IssuerSettings) -> AuthErrorResult<Self> {
        if settings.secret.is_empty() {
            return Err(AuthError::SigningFailure {
                message: "signing secret is not configured".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if settings.audience.trim().is_empty() {
            return Err(AuthError::SigningFailure {
                message: "audience is not configured".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if settings.resource_ref.trim().is_empty() {
            return Err(AuthError::SigningFailure {
                message: "resource reference is not configured".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(&settings.secret),
            header: Header::new(Algorithm::HS256),
            audience: settings.audience,
            resource_ref: settings.resource_ref,
        })
    }

    /// Issue a credential valid from now
    #[track_caller]
    pub fn issue(&self, scope_id: i64, subject: Option<&str>) -> AuthErrorResult<String> {
        self.issue_at(scope_id, subject, chrono::Utc::now().timestamp())
    }

    /// Issue a credential with an explicit issue time (Unix seconds)
    #[track_caller]
    pub fn issue_at(
        &self,
        scope_id: i64,
        subject: Option<&str>,
        issued_at: i64,
    ) -> AuthErrorResult<String> {
        let claims = self.claims_at(scope_id, subject, issued_at)?;

        let token = encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            AuthError::SigningFailure {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        debug!(
            "Issued guest credential for scope {} (subject '{}')",
            claims.scope_id(),
            claims.subject()
        );

        Ok(token)
    }

    /// The claims [`issue_at`](Self::issue_at) would sign
    #[track_caller]
    pub fn claims_at(
        &self,
        scope_id: i64,
        subject: Option<&str>,
        issued_at: i64,
    ) -> AuthErrorResult<GuestClaims> {
        let scope_id = ScopeId::new(scope_id).map_err(|_| AuthError::InvalidScope {
            value: scope_id.to_string(),
            message: "scope id must be a non-negative integer".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let subject = resolve_subject(scope_id, subject);

        Ok(GuestClaims::build(
            scope_id,
            &subject,
            &self.resource_ref,
            &self.audience,
            issued_at,
        ))
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn resource_ref(&self) -> &str {
        &self.resource_ref
    }
}

/// Subject name used in the credential; blank or missing names fall back to
/// a placeholder derived from the scope
pub fn resolve_subject(scope_id: ScopeId, subject: Option<&str>) -> String {
    match subject.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("scope-{}-user", scope_id.get()),
    }
}
