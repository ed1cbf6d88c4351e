use sv_core::SurveySummary;

use serde::Serialize;

/// Row of the survey list
#[derive(Debug, Serialize)]
pub struct SurveySummaryDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: i64,
    pub responses: i64,
}

impl From<SurveySummary> for SurveySummaryDto {
    fn from(s: SurveySummary) -> Self {
        Self {
            id: s.id.to_string(),
            title: s.title,
            description: s.description,
            status: s.status.as_str().to_string(),
            created_at: s.created_at.timestamp(),
            responses: s.responses,
        }
    }
}
