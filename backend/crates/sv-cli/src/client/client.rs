use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the sv-server REST API
pub struct Client {
    pub base_url: String,
    pub tenant_id: Option<String>,
    pub user_id: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `tenant_id` - Sent as `X-Tenant-Id`; the server default applies when `None`
    /// * `user_id` - Sent as `X-User-Id`; the server default applies when `None`
    pub fn new(base_url: &str, tenant_id: Option<&str>, user_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            tenant_id: tenant_id.map(String::from),
            user_id: user_id.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref tenant_id) = self.tenant_id {
            req = req.header("X-Tenant-Id", tenant_id);
        }
        if let Some(ref user_id) = self.user_id {
            req = req.header("X-User-Id", user_id);
        }

        req
    }

    /// Execute request and turn error bodies into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        let error = body.get("error");
        let field = |name: &str| {
            error
                .and_then(|e| e.get(name))
                .and_then(|v| v.as_str())
                .map(String::from)
        };

        Err(ClientError::Api {
            code: field("code").unwrap_or_else(|| format!("HTTP_{}", status.as_u16())),
            message: field("message").unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned()),
            field: field("field"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    // =========================================================================
    // Survey Operations
    // =========================================================================

    /// List surveys, optionally filtered by status
    pub async fn list_surveys(&self, status: Option<&str>) -> CliClientResult<Value> {
        let path = match status {
            Some(status) => format!("/api/v1/surveys?status={}", status),
            None => "/api/v1/surveys".to_string(),
        };
        let req = self.request(Method::GET, &path);
        self.execute(req).await
    }

    pub async fn get_survey(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/v1/surveys/{}", id));
        self.execute(req).await
    }

    pub async fn create_survey(
        &self,
        title: &str,
        description: Option<&str>,
        category: Option<&str>,
        frequency: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            title: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            frequency: Option<&'a str>,
        }

        let body = CreateRequest {
            title,
            description,
            category,
            frequency,
        };
        let req = self.request(Method::POST, "/api/v1/surveys").json(&body);
        self.execute(req).await
    }

    /// Partial update; `expected_version` enables the optimistic lock
    pub async fn update_survey(
        &self,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
        category: Option<&str>,
        frequency: Option<&str>,
        expected_version: Option<i32>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            frequency: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            expected_version: Option<i32>,
        }

        let body = UpdateRequest {
            title,
            description,
            category,
            frequency,
            expected_version,
        };
        let req = self
            .request(Method::PUT, &format!("/api/v1/surveys/{}", id))
            .json(&body);
        self.execute(req).await
    }

    pub async fn delete_survey(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/surveys/{}", id));
        self.execute(req).await
    }

    pub async fn archive_survey(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::POST, &format!("/api/v1/surveys/{}/archive", id));
        self.execute(req).await
    }

    pub async fn publish_survey(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::POST, &format!("/api/v1/surveys/{}/publish", id));
        self.execute(req).await
    }

    pub async fn duplicate_survey(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(
            Method::POST,
            &format!("/api/v1/surveys/{}/duplicate", id),
        );
        self.execute(req).await
    }

    // =========================================================================
    // Question Operations
    // =========================================================================

    pub async fn list_questions(&self, survey_id: &str) -> CliClientResult<Value> {
        let req = self.request(
            Method::GET,
            &format!("/api/v1/surveys/{}/questions", survey_id),
        );
        self.execute(req).await
    }

    /// Append a question, or insert it at `position`
    pub async fn add_question(
        &self,
        survey_id: &str,
        question_type: &str,
        text: &str,
        required: Option<bool>,
        position: Option<i32>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct AddQuestionRequest<'a> {
            question_type: &'a str,
            text: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            required: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            position: Option<i32>,
        }

        let body = AddQuestionRequest {
            question_type,
            text,
            required,
            position,
        };
        let req = self
            .request(
                Method::POST,
                &format!("/api/v1/surveys/{}/questions", survey_id),
            )
            .json(&body);
        self.execute(req).await
    }

    pub async fn update_question(
        &self,
        survey_id: &str,
        question_id: &str,
        question_type: Option<&str>,
        text: Option<&str>,
        required: Option<bool>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateQuestionRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            question_type: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            text: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            required: Option<bool>,
        }

        let body = UpdateQuestionRequest {
            question_type,
            text,
            required,
        };
        let req = self
            .request(
                Method::PUT,
                &format!("/api/v1/surveys/{}/questions/{}", survey_id, question_id),
            )
            .json(&body);
        self.execute(req).await
    }

    pub async fn remove_question(
        &self,
        survey_id: &str,
        question_id: &str,
    ) -> CliClientResult<Value> {
        let req = self.request(
            Method::DELETE,
            &format!("/api/v1/surveys/{}/questions/{}", survey_id, question_id),
        );
        self.execute(req).await
    }

    /// `question_ids` must list every question of the survey in the new order
    pub async fn reorder_questions(
        &self,
        survey_id: &str,
        question_ids: &[String],
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct ReorderRequest<'a> {
            question_ids: &'a [String],
        }

        let req = self
            .request(
                Method::PUT,
                &format!("/api/v1/surveys/{}/questions/order", survey_id),
            )
            .json(&ReorderRequest { question_ids });
        self.execute(req).await
    }

    // =========================================================================
    // Participation
    // =========================================================================

    pub async fn record_invitations(&self, survey_id: &str, count: i64) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct InvitationsRequest {
            count: i64,
        }

        let req = self
            .request(
                Method::POST,
                &format!("/api/v1/surveys/{}/invitations", survey_id),
            )
            .json(&InvitationsRequest { count });
        self.execute(req).await
    }

    pub async fn record_response(&self, survey_id: &str) -> CliClientResult<Value> {
        let req = self.request(
            Method::POST,
            &format!("/api/v1/surveys/{}/responses", survey_id),
        );
        self.execute(req).await
    }

    pub async fn dashboard(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/dashboard");
        self.execute(req).await
    }
}
