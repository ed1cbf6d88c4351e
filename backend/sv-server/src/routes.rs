use crate::error::{Result as ServerErrorResult, ServerError};
use crate::{
    AppState, add_question, archive_survey, create_survey, dashboard, delete_survey,
    duplicate_survey, get_survey, health, list_questions, list_surveys, publish_survey,
    record_invitations, record_response, remove_question, reorder_questions, update_question,
    update_survey,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Surveys
        .route("/api/v1/surveys", get(list_surveys).post(create_survey))
        .route(
            "/api/v1/surveys/{id}",
            get(get_survey).put(update_survey).delete(delete_survey),
        )
        .route("/api/v1/surveys/{id}/archive", post(archive_survey))
        .route("/api/v1/surveys/{id}/publish", post(publish_survey))
        .route("/api/v1/surveys/{id}/duplicate", post(duplicate_survey))
        // Questions
        .route(
            "/api/v1/surveys/{id}/questions",
            get(list_questions).post(add_question),
        )
        .route(
            "/api/v1/surveys/{id}/questions/order",
            put(reorder_questions),
        )
        .route(
            "/api/v1/surveys/{id}/questions/{question_id}",
            put(update_question).delete(remove_question),
        )
        // Participation
        .route("/api/v1/surveys/{id}/invitations", post(record_invitations))
        .route("/api/v1/surveys/{id}/responses", post(record_response))
        .route("/api/v1/dashboard", get(dashboard))
        .with_state(state)
        .layer(cors)
}

/// CORS for the configured origins; an empty list allows any origin.
pub fn cors_layer(origins: &[String]) -> ServerErrorResult<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ServerError::CorsOrigin {
                    origin: origin.clone(),
                })
            })
            .collect::<ServerErrorResult<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
