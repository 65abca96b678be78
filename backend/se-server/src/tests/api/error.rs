use crate::ApiError;

use se_auth::AuthError;
use se_core::ScopeId;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invalid_scope_returns_400_with_scope_field() {
    let error = ApiError::InvalidScope {
        message: "scopeId is required".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_SCOPE");
    assert_eq!(json["error"]["field"], "scopeId");
    assert_eq!(json["error"]["message"], "scopeId is required");
}

#[tokio::test]
async fn test_rate_limited_returns_429_without_field() {
    let error = ApiError::from(AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
    assert!(json["error"].get("field").is_none());
    assert!(json["error"]["message"].as_str().unwrap().contains("5 per 60s"));
}

#[tokio::test]
async fn test_signing_failure_returns_500_without_details() {
    let error = ApiError::from(AuthError::SigningFailure {
        message: "key material rejected".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "SIGNING_FAILURE");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("key material")
    );
}

#[tokio::test]
async fn test_unparseable_scope_converts_to_invalid_scope() {
    let core_error = "1.5".parse::<ScopeId>().unwrap_err();

    let (status, json) = body_json(ApiError::from(core_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_SCOPE");
    assert!(json["error"]["message"].as_str().unwrap().contains("1.5"));
}

#[tokio::test]
async fn test_verifier_errors_map_to_internal() {
    let error = ApiError::from(AuthError::SignatureMismatch {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}
