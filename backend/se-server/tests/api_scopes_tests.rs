//! Integration tests for the scope directory and health endpoints
mod common;

use crate::common::{body_json, create_test_app_state, get};

use se_server::build_router;

use axum::http::StatusCode;
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn test_list_scopes_in_configuration_order() {
    let app = build_router(create_test_app_state());

    let response = app.oneshot(get("/scopes")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let scopes = json.as_array().unwrap();
    assert_eq!(scopes.len(), 3);
    assert_eq!(scopes[0]["id"], 101);
    assert_eq!(scopes[0]["displayName"], "営業部");
    assert_eq!(scopes[0]["expectedAggregate"], "¥955,000");
    assert_eq!(scopes[1]["id"], 102);
    assert_eq!(scopes[2]["id"], 103);
}

#[tokio::test]
async fn test_health_reports_scope_count() {
    let app = build_router(create_test_app_state());

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["scopes"], 3);
    assert_eq!(json["components"]["issuer"]["audience"], common::TEST_AUDIENCE);
}

#[tokio::test]
async fn test_liveness_and_readiness() {
    let state = create_test_app_state();

    let live = build_router(state.clone())
        .oneshot(get("/live"))
        .await
        .unwrap();
    let ready = build_router(state).oneshot(get("/ready")).await.unwrap();

    assert_eq!(live.status(), StatusCode::OK);
    assert_eq!(ready.status(), StatusCode::OK);
    let body = ready.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Ready");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = build_router(create_test_app_state());

    let response = app.oneshot(get("/api/superset/guest-token")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
