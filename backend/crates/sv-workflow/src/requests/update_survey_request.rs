use serde::Deserialize;

/// Partial update. Absent fields are left unchanged; a blank description
/// clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSurveyRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub frequency: Option<String>,

    /// Optimistic locking; omitted means last writer wins
    #[serde(default)]
    pub expected_version: Option<i32>,
}
