use crate::{ApiResult, AppState, DashboardResponse, TenantId};

use axum::{Json, extract::State};

/// GET /api/v1/dashboard
///
/// Survey counts per status and the tenant-wide completion rate
pub async fn dashboard(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
) -> ApiResult<Json<DashboardResponse>> {
    let workflow = state.workflow(&tenant_id).await?;
    let stats = workflow.dashboard().await?;

    Ok(Json(DashboardResponse {
        dashboard: stats.into(),
    }))
}
