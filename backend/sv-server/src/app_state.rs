use crate::ApiResult;

use sv_config::{ApiConfig, ValidationConfig};
use sv_db::TenantConnectionManager;
use sv_workflow::SurveyWorkflow;

use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub tenants: Arc<TenantConnectionManager>,
    pub api_config: ApiConfig,
    pub validation: ValidationConfig,
}

impl AppState {
    pub fn new(
        tenants: TenantConnectionManager,
        api_config: ApiConfig,
        validation: ValidationConfig,
    ) -> Self {
        Self {
            tenants: Arc::new(tenants),
            api_config,
            validation,
        }
    }

    /// Workflow bound to the tenant's database, opening it on first use.
    pub async fn workflow(&self, tenant_id: &str) -> ApiResult<SurveyWorkflow> {
        let pool = self.tenants.get_pool(tenant_id).await?;
        Ok(SurveyWorkflow::new(pool, self.validation.clone()))
    }
}
