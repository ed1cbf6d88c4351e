use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Status with open tenant database count
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": {
                "open_tenants": state.tenants.open_pool_count().await,
            },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe
///
/// Ready once the default tenant's database answers a trivial query.
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    let tenant_id = &state.api_config.default_tenant_id;

    let pool = match state.tenants.get_pool(tenant_id).await {
        Ok(pool) => pool,
        Err(e) => {
            log::warn!("Readiness check failed to open tenant {}: {}", tenant_id, e);
            return (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response();
        }
    };

    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check query failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}
