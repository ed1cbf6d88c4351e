use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MIN_DESCRIPTION_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_QUESTION_LENGTH: usize = 1;
pub const MAX_QUESTION_LENGTH: usize = 5000;
pub const DEFAULT_MAX_QUESTION_LENGTH: usize = 1000;

pub const MIN_QUESTIONS_PER_SURVEY: usize = 1;
pub const MAX_QUESTIONS_PER_SURVEY: usize = 1000;
pub const DEFAULT_MAX_QUESTIONS_PER_SURVEY: usize = 200;

pub const MIN_INVITATIONS_PER_REQUEST: i64 = 1;
pub const MAX_INVITATIONS_PER_REQUEST: i64 = 1_000_000;
pub const DEFAULT_MAX_INVITATIONS_PER_REQUEST: i64 = 100_000;

/// Field limits applied to every survey and question write.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for survey titles, in characters
    pub max_title_length: usize,
    pub max_description_length: usize,
    /// Maximum length for question text, in characters
    pub max_question_length: usize,
    pub max_questions_per_survey: usize,
    /// Largest invitation batch accepted in one call
    pub max_invitations_per_request: i64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_question_length: DEFAULT_MAX_QUESTION_LENGTH,
            max_questions_per_survey: DEFAULT_MAX_QUESTIONS_PER_SURVEY,
            max_invitations_per_request: DEFAULT_MAX_INVITATIONS_PER_REQUEST,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_description_length < MIN_DESCRIPTION_LENGTH
            || self.max_description_length > MAX_DESCRIPTION_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_description_length must be {}-{}, got {}",
                MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        if self.max_question_length < MIN_QUESTION_LENGTH
            || self.max_question_length > MAX_QUESTION_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_question_length must be {}-{}, got {}",
                MIN_QUESTION_LENGTH, MAX_QUESTION_LENGTH, self.max_question_length
            )));
        }

        if self.max_questions_per_survey < MIN_QUESTIONS_PER_SURVEY
            || self.max_questions_per_survey > MAX_QUESTIONS_PER_SURVEY
        {
            return Err(ConfigError::config(format!(
                "validation.max_questions_per_survey must be {}-{}, got {}",
                MIN_QUESTIONS_PER_SURVEY, MAX_QUESTIONS_PER_SURVEY, self.max_questions_per_survey
            )));
        }

        if self.max_invitations_per_request < MIN_INVITATIONS_PER_REQUEST
            || self.max_invitations_per_request > MAX_INVITATIONS_PER_REQUEST
        {
            return Err(ConfigError::config(format!(
                "validation.max_invitations_per_request must be {}-{}, got {}",
                MIN_INVITATIONS_PER_REQUEST,
                MAX_INVITATIONS_PER_REQUEST,
                self.max_invitations_per_request
            )));
        }

        Ok(())
    }
}
