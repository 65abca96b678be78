use crate::{AppState, health, issue_guest_token, list_scopes};

use axum::{Router, http::Method, routing::get};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::exact(state.cors_origin.clone()))
        .allow_methods([Method::GET])
        .allow_credentials(true);

    Router::new()
        // Credential issuance
        .route("/scope/guest-token", get(issue_guest_token))
        .route("/scopes", get(list_scopes))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(cors)
}
