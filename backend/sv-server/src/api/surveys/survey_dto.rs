use crate::QuestionDto;

use sv_core::Survey;

use serde::Serialize;

/// Full survey for JSON serialization
#[derive(Debug, Serialize)]
pub struct SurveyDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub category: String,
    pub frequency: String,
    pub responses: i64,
    pub total_invited: i64,
    /// Percentage in [0, 100], derived on every read
    pub completion_rate: f64,
    pub questions: Vec<QuestionDto>,
    pub version: i32,
    pub created_at: i64,
    pub updated_at: i64,
    pub created_by: String,
    pub updated_by: String,
}

impl From<Survey> for SurveyDto {
    fn from(s: Survey) -> Self {
        Self {
            id: s.id.to_string(),
            status: s.status.as_str().to_string(),
            category: s.category.as_str().to_string(),
            frequency: s.frequency.as_str().to_string(),
            responses: s.aggregate.responses(),
            total_invited: s.aggregate.total_invited(),
            completion_rate: s.aggregate.completion_rate(),
            questions: s.questions.into_iter().map(QuestionDto::from).collect(),
            version: s.version,
            created_at: s.created_at.timestamp(),
            updated_at: s.updated_at.timestamp(),
            created_by: s.created_by.to_string(),
            updated_by: s.updated_by.to_string(),
            title: s.title,
            description: s.description,
        }
    }
}
