mod tenant_id;
mod user_id;

use crate::AppState;

use sv_config::{ApiConfig, ValidationConfig};
use sv_db::TenantConnectionManager;

/// Extractors never open a database, so the tenants directory is never created
fn create_test_state() -> AppState {
    AppState::new(
        TenantConnectionManager::new("unused-tenants-dir"),
        ApiConfig::default(),
        ValidationConfig::default(),
    )
}
