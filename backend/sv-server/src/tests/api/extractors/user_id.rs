use super::create_test_state;
use crate::UserId;

use sv_config::DEFAULT_USER_ID;

use axum::{body::Body, extract::FromRequestParts, http::Request};

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state();
    let request = Request::builder()
        .header("X-User-Id", "12345678-1234-1234-1234-123456789abc")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = UserId::from_request_parts(&mut parts, &state).await;

    assert_eq!(
        result.unwrap().0.to_string(),
        "12345678-1234-1234-1234-123456789abc"
    );
}

#[tokio::test]
async fn test_extractor_without_header_uses_default_user() {
    let state = create_test_state();
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = UserId::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap().0.to_string(), DEFAULT_USER_ID);
}

#[tokio::test]
async fn test_extractor_with_invalid_uuid_falls_back_to_default_user() {
    let state = create_test_state();
    let request = Request::builder()
        .header("X-User-Id", "not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = UserId::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap().0.to_string(), DEFAULT_USER_ID);
}
