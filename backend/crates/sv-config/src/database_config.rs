use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BUSY_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS_PER_TENANT,
    DEFAULT_MAX_TENANTS, DEFAULT_TENANTS_DIRECTORY, MAX_BUSY_TIMEOUT_SECS,
    MAX_MAX_CONNECTIONS_PER_TENANT, MAX_MAX_TENANTS, MIN_MAX_CONNECTIONS_PER_TENANT,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Directory holding one sub-directory per tenant, relative to the config dir
    pub dir: String,
    pub max_connections_per_tenant: u32,
    pub busy_timeout_secs: u64,
    /// Upper bound on tenant databases; unknown tenants past it are refused
    pub max_tenants: usize,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_TENANTS_DIRECTORY),
            max_connections_per_tenant: DEFAULT_MAX_CONNECTIONS_PER_TENANT,
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
            max_tenants: DEFAULT_MAX_TENANTS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.is_empty() || Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::database(
                "database.dir must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections_per_tenant < MIN_MAX_CONNECTIONS_PER_TENANT
            || self.max_connections_per_tenant > MAX_MAX_CONNECTIONS_PER_TENANT
        {
            return Err(ConfigError::database(format!(
                "database.max_connections_per_tenant must be {}-{}, got {}",
                MIN_MAX_CONNECTIONS_PER_TENANT,
                MAX_MAX_CONNECTIONS_PER_TENANT,
                self.max_connections_per_tenant
            )));
        }

        if self.busy_timeout_secs > MAX_BUSY_TIMEOUT_SECS {
            return Err(ConfigError::database(format!(
                "database.busy_timeout_secs must be at most {}, got {}",
                MAX_BUSY_TIMEOUT_SECS, self.busy_timeout_secs
            )));
        }

        if self.max_tenants == 0 || self.max_tenants > MAX_MAX_TENANTS {
            return Err(ConfigError::database(format!(
                "database.max_tenants must be 1-{}, got {}",
                MAX_MAX_TENANTS, self.max_tenants
            )));
        }

        Ok(())
    }
}
