use crate::DashboardDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub dashboard: DashboardDto,
}
