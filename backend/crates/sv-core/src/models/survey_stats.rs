use crate::completion_rate;

use serde::Serialize;

/// Tenant-wide counts for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SurveyStats {
    pub total: i64,
    pub draft: i64,
    pub published: i64,
    pub archived: i64,
    pub responses: i64,
    pub total_invited: i64,
}

impl SurveyStats {
    /// Completion rate across every survey of the tenant
    pub fn completion_rate(&self) -> f64 {
        completion_rate(self.responses, self.total_invited)
    }
}
