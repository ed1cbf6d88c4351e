use sv_core::{Question, QuestionType, Survey, SurveyCategory, SurveyFrequency};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Creates a draft survey with no questions
pub fn create_test_survey(user_id: Uuid) -> Survey {
    Survey::new(
        "Q3 Engagement".to_string(),
        Some("Quarterly pulse".to_string()),
        SurveyCategory::Engagement,
        SurveyFrequency::Quarterly,
        user_id,
    )
}

/// Creates a survey whose creation time is `offset_secs` after a fixed instant
pub fn create_test_survey_at(user_id: Uuid, title: &str, offset_secs: i64) -> Survey {
    let mut survey = create_test_survey(user_id);
    let base = DateTime::from_timestamp(1_760_000_000, 0).unwrap_or_else(Utc::now);
    survey.title = title.to_string();
    survey.created_at = base + Duration::seconds(offset_secs);
    survey.updated_at = survey.created_at;
    survey
}

pub fn create_test_question(survey_id: Uuid, position: i32) -> Question {
    Question::new(
        survey_id,
        QuestionType::Likert,
        format!("Question {}", position + 1),
        true,
        position,
    )
}
