use crate::CliResult;

use se_auth::CredentialVerifier;
use se_config::Config;

use serde_json::{Value, json};

/// Check a credential the way the rendering engine would and describe it
pub fn verify_token(config: &Config, token: &str) -> CliResult<Value> {
    config.auth.validate()?;

    let verifier =
        CredentialVerifier::with_hs256(&config.auth.secret_bytes(), &config.auth.audience);
    let claims = verifier.verify(token.trim())?;

    Ok(json!({
        "valid": true,
        "scopeId": claims.scope_id(),
        "subject": claims.subject(),
        "clause": claims.row_filter_clause(),
        "resource": claims.resource_ref(),
        "issuedAt": claims.iat,
        "expiresAt": claims.exp,
        "audience": claims.aud,
    }))
}
