use crate::SurveyStatus;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Row shown in the survey list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveySummary {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: SurveyStatus,
    pub created_at: DateTime<Utc>,
    pub responses: i64,
}
