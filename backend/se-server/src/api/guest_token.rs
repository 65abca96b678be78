//! Guest credential issuance

use crate::{ApiError, ApiResult, AppState, GuestTokenQuery};

use se_auth::resolve_subject;
use se_core::{GuestTokenGrant, ScopeId};

use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use error_location::ErrorLocation;
use log::info;

/// GET /scope/guest-token?scopeId=<int>&subject=<name>
///
/// Issue a guest credential whose row filter pins the view to one scope
pub async fn issue_guest_token(
    State(state): State<AppState>,
    query: Result<Query<GuestTokenQuery>, QueryRejection>,
) -> ApiResult<Json<GuestTokenGrant>> {
    // Duplicated or otherwise undecodable parameters
    let Query(query) = query.map_err(|rejection| ApiError::InvalidScope {
        message: rejection.body_text(),
        location: ErrorLocation::from(Location::caller()),
    })?;
    let raw = query
        .scope_id
        .as_deref()
        .ok_or_else(|| ApiError::InvalidScope {
            message: "scopeId is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let scope_id: ScopeId = raw.parse()?;

    state.limiter.check()?;

    let subject = resolve_subject(scope_id, query.subject.as_deref());
    let token = state.issuer.issue(scope_id.get(), Some(&subject))?;

    info!("Issued guest credential for scope {} to '{}'", scope_id, subject);

    Ok(Json(GuestTokenGrant {
        token,
        dashboard_url: state.dashboard_url.to_string(),
        scope_id,
        subject,
    }))
}
