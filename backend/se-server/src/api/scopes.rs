use crate::AppState;

use se_core::ScopeEntry;

use axum::{Json, extract::State};

/// GET /scopes
///
/// The tenant directory, in configuration order
pub async fn list_scopes(State(state): State<AppState>) -> Json<Vec<ScopeEntry>> {
    Json(state.catalog.entries().to_vec())
}
