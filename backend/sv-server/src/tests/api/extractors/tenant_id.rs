use super::create_test_state;
use crate::{ApiError, TenantId};

use sv_config::DEFAULT_TENANT_ID;

use axum::{body::Body, extract::FromRequestParts, http::Request};

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state();
    let request = Request::builder()
        .header("X-Tenant-Id", "acme_corp-01")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = TenantId::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap().0, "acme_corp-01");
}

#[tokio::test]
async fn test_extractor_without_header_uses_default_tenant() {
    let state = create_test_state();
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = TenantId::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap().0, DEFAULT_TENANT_ID);
}

#[tokio::test]
async fn test_extractor_rejects_path_traversal() {
    let state = create_test_state();
    let request = Request::builder()
        .header("X-Tenant-Id", "../other")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = TenantId::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_overlong_tenant() {
    let state = create_test_state();
    let request = Request::builder()
        .header("X-Tenant-Id", "t".repeat(65))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = TenantId::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}
