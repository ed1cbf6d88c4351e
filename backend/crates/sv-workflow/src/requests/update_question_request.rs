use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuestionRequest {
    #[serde(default)]
    pub question_type: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub required: Option<bool>,
}
