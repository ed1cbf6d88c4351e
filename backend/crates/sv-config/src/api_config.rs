use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;
use uuid::Uuid;

/// Identity used when a request carries no X-User-Id header
pub const DEFAULT_USER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Tenant used when a request carries no X-Tenant-Id header
pub const DEFAULT_TENANT_ID: &str = "default";

const MAX_TENANT_ID_LENGTH: usize = 64;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub default_user_id: String,
    pub default_tenant_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_user_id: DEFAULT_USER_ID.to_string(),
            default_tenant_id: DEFAULT_TENANT_ID.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Uuid::parse_str(&self.default_user_id).is_err() {
            return Err(ConfigError::api(format!(
                "api.default_user_id must be a UUID, got '{}'",
                self.default_user_id
            )));
        }

        let tenant = &self.default_tenant_id;
        if tenant.is_empty()
            || tenant.len() > MAX_TENANT_ID_LENGTH
            || !tenant
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::api(format!(
                "api.default_tenant_id must match [A-Za-z0-9_-]{{1,{}}}, got '{}'",
                MAX_TENANT_ID_LENGTH, tenant
            )));
        }

        Ok(())
    }

    /// The default user id as a UUID. Falls back to the built-in id when the
    /// configured value does not parse.
    pub fn default_user_uuid(&self) -> Uuid {
        Uuid::parse_str(&self.default_user_id).unwrap_or(Uuid::from_u128(1))
    }
}
