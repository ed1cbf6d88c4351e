use crate::QuestionDto;
use serde::Serialize;

/// Questions of one survey, in position order
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionDto>,
}
