use sv_core::SurveyStats;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardDto {
    pub total: i64,
    pub draft: i64,
    pub published: i64,
    pub archived: i64,
    pub responses: i64,
    pub total_invited: i64,
    pub completion_rate: f64,
}

impl From<SurveyStats> for DashboardDto {
    fn from(s: SurveyStats) -> Self {
        Self {
            completion_rate: s.completion_rate(),
            total: s.total,
            draft: s.draft,
            published: s.published,
            archived: s.archived,
            responses: s.responses,
            total_invited: s.total_invited,
        }
    }
}
