//! Question REST API handlers
//!
//! Questions always live under their survey; every mutation also bumps the
//! survey's version.

use crate::{
    ApiResult, AppState, DeleteResponse, QuestionDto, QuestionListResponse, QuestionResponse,
    TenantId, UserId,
};

use sv_workflow::{
    AddQuestionRequest, InputValidator, ReorderQuestionsRequest, UpdateQuestionRequest,
};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/v1/surveys/{id}/questions
pub async fn list_questions(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    Path(id): Path<String>,
) -> ApiResult<Json<QuestionListResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;

    let workflow = state.workflow(&tenant_id).await?;
    let questions = workflow.list_questions(survey_id).await?;

    Ok(Json(QuestionListResponse {
        questions: questions.into_iter().map(QuestionDto::from).collect(),
    }))
}

/// POST /api/v1/surveys/{id}/questions
pub async fn add_question(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    Json(req): Json<AddQuestionRequest>,
) -> ApiResult<Json<QuestionResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;

    let workflow = state.workflow(&tenant_id).await?;
    let question = workflow.add_question(survey_id, req, user_id).await?;

    Ok(Json(QuestionResponse {
        question: question.into(),
    }))
}

/// PUT /api/v1/surveys/{id}/questions/{question_id}
pub async fn update_question(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    UserId(user_id): UserId,
    Path((id, question_id)): Path<(String, String)>,
    Json(req): Json<UpdateQuestionRequest>,
) -> ApiResult<Json<QuestionResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;
    let question_id = InputValidator::uuid(&question_id, "question_id")?;

    let workflow = state.workflow(&tenant_id).await?;
    let question = workflow
        .update_question(survey_id, question_id, req, user_id)
        .await?;

    Ok(Json(QuestionResponse {
        question: question.into(),
    }))
}

/// DELETE /api/v1/surveys/{id}/questions/{question_id}
pub async fn remove_question(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    UserId(user_id): UserId,
    Path((id, question_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;
    let question_id = InputValidator::uuid(&question_id, "question_id")?;

    let workflow = state.workflow(&tenant_id).await?;
    workflow
        .remove_question(survey_id, question_id, user_id)
        .await?;

    Ok(Json(DeleteResponse {
        deleted_id: question_id.to_string(),
    }))
}

/// PUT /api/v1/surveys/{id}/questions/order
///
/// Body lists every question id of the survey in the new order.
pub async fn reorder_questions(
    State(state): State<AppState>,
    TenantId(tenant_id): TenantId,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    Json(req): Json<ReorderQuestionsRequest>,
) -> ApiResult<Json<QuestionListResponse>> {
    let survey_id = InputValidator::uuid(&id, "id")?;

    let workflow = state.workflow(&tenant_id).await?;
    let questions = workflow
        .reorder_questions(survey_id, req, user_id)
        .await?;

    Ok(Json(QuestionListResponse {
        questions: questions.into_iter().map(QuestionDto::from).collect(),
    }))
}
