#![allow(dead_code)]

//! Test infrastructure for sv-server API tests

use sv_config::{ApiConfig, ValidationConfig};
use sv_db::TenantConnectionManager;
use sv_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

pub const TEST_USER_ID: &str = "00000000-0000-0000-0000-0000000000aa";

/// Router over a throwaway tenants directory
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _tenants_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_max_tenants(100)
    }

    pub fn with_max_tenants(max_tenants: usize) -> Self {
        let tenants_dir = TempDir::new().expect("Failed to create temp dir");
        let state = AppState::new(
            TenantConnectionManager::new(tenants_dir.path()).with_max_tenants(max_tenants),
            ApiConfig::default(),
            ValidationConfig::default(),
        );
        let router = build_router(state.clone(), CorsLayer::permissive());

        Self {
            router,
            state,
            _tenants_dir: tenants_dir,
        }
    }

    /// Send a request to the default tenant
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.request_for_tenant(None, method, uri, body).await
    }

    pub async fn request_for_tenant(
        &self,
        tenant_id: Option<&str>,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("X-User-Id", TEST_USER_ID);
        if let Some(tenant_id) = tenant_id {
            builder = builder.header("X-Tenant-Id", tenant_id);
        }

        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        (status, json)
    }

    /// Create a draft survey and return its JSON
    pub async fn create_survey(&self, title: &str) -> Value {
        let (status, json) = self
            .request("POST", "/api/v1/surveys", Some(json!({ "title": title })))
            .await;
        assert_eq!(status, StatusCode::OK, "create failed: {}", json);
        json["survey"].clone()
    }

    /// Add a likert question and return its JSON
    pub async fn add_question(&self, survey_id: &str, text: &str) -> Value {
        let (status, json) = self
            .request(
                "POST",
                &format!("/api/v1/surveys/{}/questions", survey_id),
                Some(json!({ "question_type": "likert", "text": text })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "add question failed: {}", json);
        json["question"].clone()
    }

    pub async fn publish(&self, survey_id: &str) {
        let (status, json) = self
            .request(
                "POST",
                &format!("/api/v1/surveys/{}/publish", survey_id),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK, "publish failed: {}", json);
    }
}

/// Texts of a survey's questions, in order
pub fn question_texts(survey: &Value) -> Vec<String> {
    survey["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["text"].as_str().unwrap().to_string())
        .collect()
}
