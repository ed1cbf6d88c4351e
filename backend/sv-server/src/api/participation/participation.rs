//! Invitation and response counting

use crate::{ApiResult, AppState, SurveyResponse, TenantId, UserId};

use sv_workflow::{InputValidator, RecordInvitationsRequest};

use axum::{
    Json,
    extract::{Path, State},
};

/// POST /api/v1/surveys/{id}/invitations
pub async fn record_invitations(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    Json(req): Json<RecordInvitationsRequest>,
) -> ApiResult<Json<SurveyResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;

    let workflow = state.workflow(&tenant_id).await?;
    let survey = workflow
        .record_invitations(survey_id, req.count, user_id)
        .await?;

    Ok(Json(SurveyResponse {
        survey: survey.into(),
    }))
}

/// POST /api/v1/surveys/{id}/responses
///
/// Counts one completed response; the survey must be published.
pub async fn record_response(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<SurveyResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;

    let workflow = state.workflow(&tenant_id).await?;
    let survey = workflow.record_response(survey_id, user_id).await?;

    Ok(Json(SurveyResponse {
        survey: survey.into(),
    }))
}
