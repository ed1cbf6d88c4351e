//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with a matching HTTP status.

use sv_db::DbError;
use sv_workflow::WorkflowError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Offending request field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Stale `expected_version` (409)
    #[error("Conflict: survey was modified (current version: {current_version}) {location}")]
    Conflict {
        message: String,
        current_version: i32,
        location: ErrorLocation,
    },

    /// Operation not allowed in the survey's lifecycle status (409)
    #[error("Invalid state: {message} {location}")]
    InvalidState {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict {
                message,
                current_version,
                ..
            } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message: format!("{} (current version: {})", message, current_version),
                    field: None,
                },
            ),
            ApiError::InvalidState { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "INVALID_STATE".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::InvalidTenant { tenant_id, .. } => ApiError::BadRequest {
                message: format!("Invalid tenant id '{}'", tenant_id),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::TenantLimit {
                tenant_id,
                max_tenants,
                ..
            } => ApiError::BadRequest {
                message: format!(
                    "Unknown tenant '{}' and the limit of {} tenants is reached",
                    tenant_id, max_tenants
                ),
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                // Database details stay in the log
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<WorkflowError> for ApiError {
    #[track_caller]
    fn from(e: WorkflowError) -> Self {
        match e {
            WorkflowError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            WorkflowError::NotFound { message, .. } => ApiError::NotFound {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            WorkflowError::InvalidState { message, .. } => ApiError::InvalidState {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            WorkflowError::Conflict {
                current_version, ..
            } => ApiError::Conflict {
                message: "Version mismatch".to_string(),
                current_version,
                location: ErrorLocation::from(Location::caller()),
            },
            WorkflowError::Database { source } => ApiError::from(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
