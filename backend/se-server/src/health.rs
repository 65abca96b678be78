use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "issuer": {
                "status": "operational",
                "audience": state.issuer.audience(),
            },
            "scopes": state.catalog.len(),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe; ready once there is at least one scope to serve
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.catalog.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "No scopes configured").into_response();
    }
    (StatusCode::OK, "Ready").into_response()
}
