use serde::Deserialize;

/// Every question id of the survey, in the new order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReorderQuestionsRequest {
    pub question_ids: Vec<String>,
}
