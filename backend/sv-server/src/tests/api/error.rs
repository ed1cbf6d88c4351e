use crate::ApiError;

use sv_db::DbError;
use sv_workflow::WorkflowError;

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
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Survey not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Survey not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Title too long".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_conflict_error_returns_409_with_version() {
    let error = ApiError::Conflict {
        message: "Version mismatch".into(),
        current_version: 5,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert!(json["error"]["message"].as_str().unwrap().contains("5"));
}

#[tokio::test]
async fn test_invalid_state_returns_409() {
    let error = ApiError::InvalidState {
        message: "Survey is archived".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "INVALID_STATE");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("Invalid UUID"));
            assert!(field.is_none());
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_workflow_errors_map_to_matching_api_errors() {
    let validation: ApiError = WorkflowError::validation("Title cannot be empty", "title").into();
    assert!(matches!(
        validation,
        ApiError::Validation { field: Some(ref f), .. } if f == "title"
    ));

    let not_found: ApiError = WorkflowError::not_found("Survey x not found").into();
    assert!(matches!(not_found, ApiError::NotFound { .. }));

    let invalid_state: ApiError = WorkflowError::invalid_state("Survey is archived").into();
    assert!(matches!(invalid_state, ApiError::InvalidState { .. }));

    let conflict: ApiError = WorkflowError::Conflict {
        current_version: 3,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    assert!(matches!(
        conflict,
        ApiError::Conflict {
            current_version: 3,
            ..
        }
    ));
}

#[test]
fn test_database_errors_hide_details() {
    let api_err: ApiError = WorkflowError::from(sqlx::Error::RowNotFound).into();

    match api_err {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_invalid_tenant_converts_to_bad_request() {
    let db_err = DbError::InvalidTenant {
        tenant_id: "../escape".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    assert!(matches!(api_err, ApiError::BadRequest { .. }));
}
