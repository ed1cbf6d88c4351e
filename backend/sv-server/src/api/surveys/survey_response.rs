use crate::SurveyDto;
use serde::Serialize;

/// Single survey response
#[derive(Debug, Serialize)]
pub struct SurveyResponse {
    pub survey: SurveyDto,
}
