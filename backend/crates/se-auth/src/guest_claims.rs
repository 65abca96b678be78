use crate::{
    AuthError, GUEST_TOKEN_TTL_SECS, RESOURCE_TYPE_DASHBOARD, Result as AuthErrorResult,
    RowFilter, TOKEN_TYPE_GUEST,
};

use se_core::ScopeId;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Guest credential claims - matches the rendering engine's guest token format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestClaims {
    pub user: GuestUser,
    /// Embeddable views this credential unlocks
    pub resources: Vec<GuestResource>,
    /// Row-level predicates applied by the engine
    pub rls_rules: Vec<RowLevelRule>,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    pub aud: String,
    #[serde(rename = "type")]
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub extra_json: GuestExtra,
}

/// Auxiliary metadata; carries a second copy of the scope for engines that
/// enforce isolation through dataset templating instead of row rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestExtra {
    pub target_scope_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestResource {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowLevelRule {
    pub clause: String,
}

impl GuestClaims {
    /// Assemble the claims for one scope. Pure in all arguments.
    pub fn build(
        scope_id: ScopeId,
        subject: &str,
        resource_ref: &str,
        audience: &str,
        issued_at: i64,
    ) -> Self {
        Self {
            user: GuestUser {
                username: subject.to_string(),
                first_name: "Guest".to_string(),
                last_name: "User".to_string(),
                extra_json: GuestExtra {
                    target_scope_id: scope_id.get(),
                },
            },
            resources: vec![GuestResource {
                kind: RESOURCE_TYPE_DASHBOARD.to_string(),
                id: resource_ref.to_string(),
            }],
            rls_rules: vec![RowLevelRule {
                clause: RowFilter::for_scope(scope_id).clause(),
            }],
            iat: issued_at,
            exp: issued_at + GUEST_TOKEN_TTL_SECS,
            aud: audience.to_string(),
            token_type: TOKEN_TYPE_GUEST.to_string(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.user.username
    }

    pub fn scope_id(&self) -> i64 {
        self.user.extra_json.target_scope_id
    }

    /// The single row-level clause, if exactly one is present
    pub fn row_filter_clause(&self) -> Option<&str> {
        match self.rls_rules.as_slice() {
            [rule] => Some(rule.clause.as_str()),
            _ => None,
        }
    }

    pub fn resource_ref(&self) -> Option<&str> {
        self.resources.first().map(|r| r.id.as_str())
    }

    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.token_type != TOKEN_TYPE_GUEST {
            return Err(Self::invalid("type", "token type must be 'guest'"));
        }

        if self.user.username.is_empty() {
            return Err(Self::invalid("user.username", "username cannot be empty"));
        }

        let scope_id = ScopeId::new(self.scope_id()).map_err(|_| {
            Self::invalid(
                "user.extra_json.target_scope_id",
                "scope id must be a non-negative integer",
            )
        })?;

        let expected_clause = RowFilter::for_scope(scope_id).clause();
        match self.row_filter_clause() {
            Some(clause) if clause == expected_clause => {}
            Some(_) => {
                return Err(Self::invalid(
                    "rls_rules",
                    "row filter does not match the target scope",
                ));
            }
            None => {
                return Err(Self::invalid(
                    "rls_rules",
                    "exactly one row filter is required",
                ));
            }
        }

        if self.resources.len() != 1 {
            return Err(Self::invalid(
                "resources",
                "exactly one embeddable resource is required",
            ));
        }

        if self.exp - self.iat != GUEST_TOKEN_TTL_SECS {
            return Err(Self::invalid("exp", "lifetime must be exactly 24 hours"));
        }

        Ok(())
    }

    #[track_caller]
    fn invalid(claim: &str, message: &str) -> AuthError {
        AuthError::InvalidClaim {
            claim: claim.to_string(),
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
