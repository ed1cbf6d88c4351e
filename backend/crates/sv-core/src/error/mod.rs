use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid survey status: {value} {location}")]
    InvalidSurveyStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid survey category: {value} {location}")]
    InvalidSurveyCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid survey frequency: {value} {location}")]
    InvalidSurveyFrequency {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid question type: {value} {location}")]
    InvalidQuestionType {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
