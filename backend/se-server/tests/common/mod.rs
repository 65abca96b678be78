#![allow(dead_code)]

//! Test infrastructure for se-server API tests

use se_auth::{CredentialIssuer, IssuanceRateLimiter, IssuerSettings, RateLimitConfig};
use se_core::{ScopeCatalog, ScopeEntry, ScopeId};
use se_server::AppState;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use http::HeaderValue;
use http_body_util::BodyExt;

pub const TEST_SECRET: &[u8] = b"integration-secret-at-least-32-bytes!";
pub const TEST_AUDIENCE: &str = "http://superset:8088/";
pub const TEST_RESOURCE: &str = "7aaabc03-2c47-4540-8233-f22bbdb2cc81";
pub const TEST_DASHBOARD_URL: &str = "http://localhost:8088/dashboard/12/embedded";
pub const TEST_ORIGIN: &str = "http://localhost:4200";

pub fn test_catalog() -> ScopeCatalog {
    ScopeCatalog::new(vec![
        entry(101, "営業部", "¥955,000"),
        entry(102, "開発部", "¥835,000"),
        entry(103, "マーケティング部", "¥240,000"),
    ])
    .unwrap()
}

fn entry(id: i64, name: &str, aggregate: &str) -> ScopeEntry {
    ScopeEntry {
        id: ScopeId::new(id).unwrap(),
        display_name: name.to_string(),
        expected_aggregate: aggregate.to_string(),
    }
}

/// AppState with a generous rate limit
pub fn create_test_app_state() -> AppState {
    create_test_app_state_with_limit(1000)
}

pub fn create_test_app_state_with_limit(max_requests: u32) -> AppState {
    let issuer = CredentialIssuer::new(IssuerSettings {
        secret: TEST_SECRET.to_vec(),
        audience: TEST_AUDIENCE.to_string(),
        resource_ref: TEST_RESOURCE.to_string(),
    })
    .unwrap();

    AppState {
        issuer: Arc::new(issuer),
        limiter: Arc::new(IssuanceRateLimiter::new(RateLimitConfig {
            max_requests,
            window_secs: 3600,
        })),
        catalog: Arc::new(test_catalog()),
        dashboard_url: Arc::from(TEST_DASHBOARD_URL),
        cors_origin: HeaderValue::from_static(TEST_ORIGIN),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
