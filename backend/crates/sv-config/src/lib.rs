mod api_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use api_config::{ApiConfig, DEFAULT_TENANT_ID, DEFAULT_USER_ID};
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "SV_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".survey";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_TENANTS_DIRECTORY: &str = "tenants";
const DEFAULT_MAX_CONNECTIONS_PER_TENANT: u32 = 5;
const MIN_MAX_CONNECTIONS_PER_TENANT: u32 = 1;
const MAX_MAX_CONNECTIONS_PER_TENANT: u32 = 100;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
const MAX_BUSY_TIMEOUT_SECS: u64 = 300;
const DEFAULT_MAX_TENANTS: usize = 100;
const MAX_MAX_TENANTS: usize = 10_000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
