use crate::SurveySummaryDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SurveyListResponse {
    pub surveys: Vec<SurveySummaryDto>,
}
