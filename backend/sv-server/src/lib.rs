pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    dashboard::{
        dashboard::dashboard, dashboard_dto::DashboardDto, dashboard_response::DashboardResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{tenant_id::TenantId, user_id::UserId},
    participation::participation::{record_invitations, record_response},
    questions::{
        question_dto::QuestionDto,
        question_list_response::QuestionListResponse,
        question_response::QuestionResponse,
        questions::{
            add_question, list_questions, remove_question, reorder_questions, update_question,
        },
    },
    surveys::{
        list_surveys_query::ListSurveysQuery,
        survey_dto::SurveyDto,
        survey_list_response::SurveyListResponse,
        survey_response::SurveyResponse,
        survey_summary_dto::SurveySummaryDto,
        surveys::{
            archive_survey, create_survey, delete_survey, duplicate_survey, get_survey,
            list_surveys, publish_survey, update_survey,
        },
    },
};
pub use app_state::AppState;

pub use crate::routes::{build_router, cors_layer};
