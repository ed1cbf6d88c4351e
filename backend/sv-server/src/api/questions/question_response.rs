use crate::QuestionDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question: QuestionDto,
}
