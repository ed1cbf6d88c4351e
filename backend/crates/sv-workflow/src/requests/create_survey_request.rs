use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSurveyRequest {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Defaults to "engagement"
    #[serde(default)]
    pub category: Option<String>,

    /// Defaults to "quarterly"
    #[serde(default)]
    pub frequency: Option<String>,
}
