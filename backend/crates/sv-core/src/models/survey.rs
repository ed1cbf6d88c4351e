//! Survey entity - a configurable questionnaire with a lifecycle status.

use crate::{Question, ResponseAggregate, SurveyCategory, SurveyFrequency, SurveyStatus};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Appended to the title of a duplicated survey
pub(crate) const COPY_SUFFIX: &str = " (Copy)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Survey {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: SurveyStatus,
    pub category: SurveyCategory,
    pub frequency: SurveyFrequency,

    pub aggregate: ResponseAggregate,
    /// Ordered by position
    pub questions: Vec<Question>,

    /// Bumped on every mutation
    pub version: i32,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Weak reference to the creating user, not an ownership link
    pub created_by: Uuid,
    pub updated_by: Uuid,
}

impl Survey {
    /// Create a new survey in draft status with no questions and no responses
    pub fn new(
        title: String,
        description: Option<String>,
        category: SurveyCategory,
        frequency: SurveyFrequency,
        created_by: Uuid,
    ) -> Self {
        let now = crate::timestamp::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: SurveyStatus::Draft,
            category,
            frequency,
            aggregate: ResponseAggregate::default(),
            questions: Vec::new(),
            version: 1,
            created_at: now,
            updated_at: now,
            created_by,
            updated_by: created_by,
        }
    }

    pub fn is_archived(&self) -> bool {
        self.status == SurveyStatus::Archived
    }

    pub fn completion_rate(&self) -> f64 {
        self.aggregate.completion_rate()
    }

    /// Record a mutation by `user_id` at `now`.
    ///
    /// `updated_at` never moves before `created_at`, even with clock skew.
    pub fn touch(&mut self, user_id: Uuid, now: DateTime<Utc>) {
        self.version += 1;
        self.updated_at = now.max(self.created_at);
        self.updated_by = user_id;
    }

    /// Copy this survey as a new draft owned by `created_by`.
    ///
    /// Questions are deep-copied with new ids in the same order; the response
    /// aggregate starts from zero.
    pub fn duplicate(&self, title: String, created_by: Uuid) -> Survey {
        let mut copy = Survey::new(
            title,
            self.description.clone(),
            self.category,
            self.frequency,
            created_by,
        );
        copy.questions = self.questions.iter().map(|q| q.copy_to(copy.id)).collect();
        copy
    }
}

/// Title for a duplicated survey, truncated so the result fits in
/// `max_chars` characters.
pub fn copy_title(title: &str, max_chars: usize) -> String {
    let suffix_len = COPY_SUFFIX.chars().count();
    if max_chars <= suffix_len {
        return title.chars().take(max_chars).collect();
    }

    let base: String = title.chars().take(max_chars - suffix_len).collect();
    format!("{}{}", base.trim_end(), COPY_SUFFIX)
}
