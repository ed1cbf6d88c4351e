#![allow(dead_code)]

use sv_config::ValidationConfig;
use sv_core::Survey;
use sv_workflow::{AddQuestionRequest, CreateSurveyRequest, SurveyWorkflow};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sv_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_test_workflow() -> SurveyWorkflow {
    SurveyWorkflow::new(create_test_pool().await, ValidationConfig::default())
}

pub fn create_request(title: &str) -> CreateSurveyRequest {
    CreateSurveyRequest {
        title: title.to_string(),
        description: Some("Quarterly pulse".to_string()),
        category: Some("engagement".to_string()),
        frequency: Some("quarterly".to_string()),
    }
}

pub fn question_request(text: &str) -> AddQuestionRequest {
    AddQuestionRequest {
        question_type: "likert".to_string(),
        text: text.to_string(),
        required: None,
        position: None,
    }
}

/// Creates a survey holding questions with the given texts, in order
pub async fn create_survey_with_questions(
    workflow: &SurveyWorkflow,
    user_id: Uuid,
    texts: &[&str],
) -> Survey {
    let survey = workflow
        .create_survey(create_request("Q3 Engagement"), user_id)
        .await
        .unwrap();
    for text in texts {
        workflow
            .add_question(survey.id, question_request(text), user_id)
            .await
            .unwrap();
    }
    workflow.get_survey(survey.id).await.unwrap()
}

pub fn question_texts(survey: &Survey) -> Vec<String> {
    survey.questions.iter().map(|q| q.text.clone()).collect()
}
