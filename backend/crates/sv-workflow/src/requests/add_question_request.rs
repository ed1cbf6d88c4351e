use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddQuestionRequest {
    pub question_type: String,

    pub text: String,

    /// Defaults to true
    #[serde(default)]
    pub required: Option<bool>,

    /// 0-based insert position; appended when omitted
    #[serde(default)]
    pub position: Option<i32>,
}
