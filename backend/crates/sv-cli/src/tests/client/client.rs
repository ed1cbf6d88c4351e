use crate::{Client, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", None, None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000", None, None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_tenant_and_user_stored() {
    let client = Client::new("http://localhost:8000", Some("acme"), Some("user-123"));
    assert_eq!(client.tenant_id, Some("acme".to_string()));
    assert_eq!(client.user_id, Some("user-123".to_string()));
}

#[test]
fn test_tenant_and_user_none() {
    let client = Client::new("http://localhost:8000", None, None);
    assert!(client.tenant_id.is_none());
    assert!(client.user_id.is_none());
}

#[test]
fn test_api_error_exposes_code() {
    let err = ClientError::Api {
        code: "NOT_FOUND".into(),
        message: "Survey not found".into(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(err.code(), Some("NOT_FOUND"));
    assert!(err.to_string().contains("Survey not found"));
}
