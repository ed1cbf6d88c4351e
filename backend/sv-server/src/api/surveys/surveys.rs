//! Survey REST API handlers

use crate::{
    ApiResult, AppState, DeleteResponse, ListSurveysQuery, SurveyDto, SurveyListResponse,
    SurveyResponse, SurveySummaryDto, TenantId, UserId,
};

use sv_workflow::{CreateSurveyRequest, InputValidator, UpdateSurveyRequest};

use axum::{
    Json,
    extract::{Path, Query, State},
};

/// GET /api/v1/surveys
///
/// Newest first, optionally filtered by `?status=`
pub async fn list_surveys(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    Query(query): Query<ListSurveysQuery>,
) -> ApiResult<Json<SurveyListResponse>> {
    let status = query.status.as_deref().filter(|s| !s.trim().is_empty());

    let workflow = state.workflow(&tenant_id).await?;
    let surveys = workflow.list_surveys(status).await?;

    Ok(Json(SurveyListResponse {
        surveys: surveys.into_iter().map(SurveySummaryDto::from).collect(),
    }))
}

/// GET /api/v1/surveys/{id}
pub async fn get_survey(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    Path(id): Path<String>,
) -> ApiResult<Json<SurveyResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;

    let workflow = state.workflow(&tenant_id).await?;
    let survey = workflow.get_survey(survey_id).await?;

    Ok(Json(SurveyResponse {
        survey: survey.into(),
    }))
}

/// POST /api/v1/surveys
pub async fn create_survey(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    UserId(user_id): UserId,
    Json(req): Json<CreateSurveyRequest>,
) -> ApiResult<Json<SurveyResponse>> {
    let workflow = state.workflow(&tenant_id).await?;
    let survey = workflow.create_survey(req, user_id).await?;

    log::info!(
        "Created survey {} for tenant {} via REST API",
        survey.id,
        tenant_id
    );

    Ok(Json(SurveyResponse {
        survey: survey.into(),
    }))
}

/// PUT /api/v1/surveys/{id}
///
/// Partial update; `expected_version` turns on the optimistic lock.
pub async fn update_survey(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    Json(req): Json<UpdateSurveyRequest>,
) -> ApiResult<Json<SurveyResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;

    let workflow = state.workflow(&tenant_id).await?;
    let survey = workflow.update_survey(survey_id, req, user_id).await?;

    Ok(Json(SurveyResponse {
        survey: survey.into(),
    }))
}

/// DELETE /api/v1/surveys/{id}
///
/// Hard delete, questions included.
pub async fn delete_survey(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;

    let workflow = state.workflow(&tenant_id).await?;
    workflow.delete_survey(survey_id).await?;

    log::info!(
        "Deleted survey {} for tenant {} via REST API",
        survey_id,
        tenant_id
    );

    Ok(Json(DeleteResponse {
        deleted_id: survey_id.to_string(),
    }))
}

/// POST /api/v1/surveys/{id}/archive
pub async fn archive_survey(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<SurveyResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;

    let workflow = state.workflow(&tenant_id).await?;
    let survey = workflow.archive_survey(survey_id, user_id).await?;

    Ok(Json(SurveyResponse {
        survey: survey.into(),
    }))
}

/// POST /api/v1/surveys/{id}/publish
pub async fn publish_survey(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<SurveyResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;

    let workflow = state.workflow(&tenant_id).await?;
    let survey = workflow.publish_survey(survey_id, user_id).await?;

    Ok(Json(SurveyResponse {
        survey: survey.into(),
    }))
}

/// POST /api/v1/surveys/{id}/duplicate
///
/// The copy is a fresh draft owned by the caller.
pub async fn duplicate_survey(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<SurveyResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;

    let workflow = state.workflow(&tenant_id).await?;
    let copy = workflow.duplicate_survey(survey_id, user_id).await?;

    log::info!(
        "Duplicated survey {} as {} for tenant {} via REST API",
        survey_id,
        copy.id,
        tenant_id
    );

    Ok(Json(SurveyResponse {
        survey: SurveyDto::from(copy),
    }))
}
