use crate::{AuthError, GuestClaims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Verifies guest credentials the way the rendering engine does
pub struct CredentialVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl CredentialVerifier {
    /// Create verifier with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance
        validation.set_audience(&[audience]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verify signature, expiry and audience, then the guest claim invariants
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<GuestClaims> {
        let token_data = decode::<GuestClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    ErrorKind::InvalidSignature => AuthError::SignatureMismatch {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
