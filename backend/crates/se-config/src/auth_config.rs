use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUDIENCE, MIN_SECRET_LENGTH};

use std::fmt;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Pre-shared HS256 secret, shared out-of-band with the rendering engine
    pub signing_secret: Option<String>,
    /// `aud` claim; must match the engine's configured base URL
    pub audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signing_secret: None,
            audience: String::from(DEFAULT_AUDIENCE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.signing_secret.as_deref() {
            None | Some("") => {
                return Err(ConfigError::auth(
                    "auth.signing_secret must be set (SE_AUTH_SIGNING_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.signing_secret must be at least {} characters",
                    MIN_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if self.audience.trim().is_empty() {
            return Err(ConfigError::auth("auth.audience cannot be empty"));
        }

        Ok(())
    }

    pub fn secret_bytes(&self) -> Vec<u8> {
        self.signing_secret
            .as_deref()
            .map(|s| s.as_bytes().to_vec())
            .unwrap_or_default()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "signing_secret",
                &self.signing_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("audience", &self.audience)
            .finish()
    }
}
