use crate::{Result as WorkflowResult, WorkflowError};

use sv_config::ValidationConfig;
use sv_core::{QuestionType, SurveyCategory, SurveyFrequency, SurveyStatus};

use std::fmt::Display;
use std::str::FromStr;

use uuid::Uuid;

/// Validates and normalizes client input before anything is written.
///
/// Lengths are counted in characters, after trimming.
pub struct InputValidator;

impl InputValidator {
    /// Trimmed, non-empty title no longer than `max_title_length`
    #[track_caller]
    pub fn title(title: &str, config: &ValidationConfig) -> WorkflowResult<String> {
        Self::required_text(title, "title", config.max_title_length)
    }

    /// Trimmed description; blank becomes `None`
    #[track_caller]
    pub fn description(
        description: Option<&str>,
        config: &ValidationConfig,
    ) -> WorkflowResult<Option<String>> {
        let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) else {
            return Ok(None);
        };

        if description.chars().count() > config.max_description_length {
            return Err(WorkflowError::validation(
                format!(
                    "description must not exceed {} characters",
                    config.max_description_length
                ),
                "description",
            ));
        }

        Ok(Some(description.to_string()))
    }

    #[track_caller]
    pub fn question_text(text: &str, config: &ValidationConfig) -> WorkflowResult<String> {
        Self::required_text(text, "text", config.max_question_length)
    }

    #[track_caller]
    pub fn category(value: Option<&str>) -> WorkflowResult<SurveyCategory> {
        match value {
            None => Ok(SurveyCategory::default()),
            Some(v) => Self::vocabulary(v, "category", &SurveyCategory::ALL),
        }
    }

    #[track_caller]
    pub fn frequency(value: Option<&str>) -> WorkflowResult<SurveyFrequency> {
        match value {
            None => Ok(SurveyFrequency::default()),
            Some(v) => Self::vocabulary(v, "frequency", &SurveyFrequency::ALL),
        }
    }

    #[track_caller]
    pub fn status(value: &str) -> WorkflowResult<SurveyStatus> {
        Self::vocabulary(value, "status", &SurveyStatus::ALL)
    }

    #[track_caller]
    pub fn question_type(value: &str) -> WorkflowResult<QuestionType> {
        Self::vocabulary(value, "question_type", &QuestionType::ALL)
    }

    #[track_caller]
    pub fn invitation_count(count: i64, config: &ValidationConfig) -> WorkflowResult<i64> {
        if count <= 0 || count > config.max_invitations_per_request {
            return Err(WorkflowError::validation(
                format!(
                    "count must be between 1 and {}, got {}",
                    config.max_invitations_per_request, count
                ),
                "count",
            ));
        }

        Ok(count)
    }

    #[track_caller]
    pub fn uuid(value: &str, field: &str) -> WorkflowResult<Uuid> {
        Uuid::parse_str(value.trim()).map_err(|_| {
            WorkflowError::validation(format!("{} must be a valid UUID", field), field)
        })
    }

    #[track_caller]
    fn required_text(value: &str, field: &str, max_length: usize) -> WorkflowResult<String> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(WorkflowError::validation(
                format!("{} cannot be empty", field),
                field,
            ));
        }

        if trimmed.chars().count() > max_length {
            return Err(WorkflowError::validation(
                format!("{} must not exceed {} characters", field, max_length),
                field,
            ));
        }

        Ok(trimmed.to_string())
    }

    /// Parse one of a closed set of values, listing the valid ones on failure
    #[track_caller]
    fn vocabulary<T>(value: &str, field: &str, all: &[T]) -> WorkflowResult<T>
    where
        T: FromStr + Display,
    {
        match T::from_str(value.trim()) {
            Ok(parsed) => Ok(parsed),
            Err(_) => {
                let valid: Vec<String> = all.iter().map(ToString::to_string).collect();
                Err(WorkflowError::validation(
                    format!(
                        "Invalid {}: {}. Valid values: {}",
                        field,
                        value,
                        valid.join(", ")
                    ),
                    field,
                ))
            }
        }
    }
}
