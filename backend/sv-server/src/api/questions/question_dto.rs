use sv_core::Question;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct QuestionDto {
    pub id: String,
    pub survey_id: String,
    pub question_type: String,
    pub text: String,
    pub required: bool,
    pub position: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id.to_string(),
            survey_id: q.survey_id.to_string(),
            question_type: q.question_type.as_str().to_string(),
            text: q.text,
            required: q.required,
            position: q.position,
            created_at: q.created_at.timestamp(),
            updated_at: q.updated_at.timestamp(),
        }
    }
}
