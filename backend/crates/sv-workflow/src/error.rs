use sv_core::{CoreError, ErrorLocation};
use sv_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// The survey's lifecycle status does not allow the operation
    #[error("Invalid state: {message} {location}")]
    InvalidState {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: survey was modified (current version: {current_version}) {location}")]
    Conflict {
        current_version: i32,
        location: ErrorLocation,
    },

    #[error("Database error: {source}")]
    Database {
        #[source]
        source: DbError,
    },
}

impl WorkflowError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for WorkflowError {
    fn from(source: DbError) -> Self {
        Self::Database { source }
    }
}

impl From<sqlx::Error> for WorkflowError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Database {
            source: DbError::from(source),
        }
    }
}

impl From<CoreError> for WorkflowError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let (message, field) = match err {
            CoreError::Validation { message, field, .. } => (message, field),
            CoreError::InvalidSurveyStatus { value, .. } => (
                format!("Invalid status: {}", value),
                Some("status".to_string()),
            ),
            CoreError::InvalidSurveyCategory { value, .. } => (
                format!("Invalid category: {}", value),
                Some("category".to_string()),
            ),
            CoreError::InvalidSurveyFrequency { value, .. } => (
                format!("Invalid frequency: {}", value),
                Some("frequency".to_string()),
            ),
            CoreError::InvalidQuestionType { value, .. } => (
                format!("Invalid question_type: {}", value),
                Some("question_type".to_string()),
            ),
        };

        Self::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
