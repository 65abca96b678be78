use crate::{ServerError, ServerErrorResult};

use se_auth::{CredentialIssuer, IssuanceRateLimiter, IssuerSettings, RateLimitConfig};
use se_config::Config;
use se_core::ScopeCatalog;

use std::sync::Arc;

use http::HeaderValue;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<CredentialIssuer>,
    pub limiter: Arc<IssuanceRateLimiter>,
    pub catalog: Arc<ScopeCatalog>,
    /// `{engine_url}/dashboard/{dashboard_id}/embedded`, echoed in every grant
    pub dashboard_url: Arc<str>,
    /// The single browser origin allowed by CORS
    pub cors_origin: HeaderValue,
}

impl AppState {
    /// Build state from validated configuration.
    ///
    /// Fails if the issuer cannot be constructed; the server must not start
    /// without a usable signing secret.
    pub fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let issuer = CredentialIssuer::new(IssuerSettings {
            secret: config.auth.secret_bytes(),
            audience: config.auth.audience.clone(),
            resource_ref: config.embed.resource_ref.clone(),
        })?;

        let limiter = IssuanceRateLimiter::new(RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        });

        let cors_origin = HeaderValue::from_str(&config.server.cors_origin).map_err(|_| {
            ServerError::CorsOrigin {
                origin: config.server.cors_origin.clone(),
            }
        })?;

        Ok(Self {
            issuer: Arc::new(issuer),
            limiter: Arc::new(limiter),
            catalog: Arc::new(config.scope_catalog()?),
            dashboard_url: Arc::from(config.embed.dashboard_url()),
            cors_origin,
        })
    }
}
