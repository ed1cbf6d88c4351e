use crate::QuestionType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question owned by exactly one survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub question_type: QuestionType,
    pub text: String,
    pub required: bool,
    /// Zero-based, contiguous within the survey
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    pub fn new(
        survey_id: Uuid,
        question_type: QuestionType,
        text: String,
        required: bool,
        position: i32,
    ) -> Self {
        let now = crate::timestamp::now();
        Self {
            id: Uuid::new_v4(),
            survey_id,
            question_type,
            text,
            required,
            position,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deep copy into another survey with a fresh id
    pub fn copy_to(&self, survey_id: Uuid) -> Self {
        Self::new(
            survey_id,
            self.question_type,
            self.text.clone(),
            self.required,
            self.position,
        )
    }

    /// True when type, text, required flag and position match, ignoring ids
    /// and timestamps
    pub fn same_content(&self, other: &Question) -> bool {
        self.question_type == other.question_type
            && self.text == other.text
            && self.required == other.required
            && self.position == other.position
    }

    /// Display label, e.g. "Q1"
    pub fn label(&self) -> String {
        format!("Q{}", self.position + 1)
    }
}
