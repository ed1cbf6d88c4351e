use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRNAME, DatabaseConfig, LoggingConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. `SV_CONFIG_DIR` env var, else `./.survey/`
    /// 2. Create the config directory if missing
    /// 3. Read `config.toml` if present, else defaults
    /// 4. Apply `SV_*` environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: SV_CONFIG_DIR env var > ./.survey/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRNAME))
    }

    /// Validate every section. Call after load() so bad config fails at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        self.api.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Directory holding the per-tenant databases.
    pub fn tenants_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.dir))
    }

    /// Directory for log files.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.database.busy_timeout_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// URL a local client should use to reach this server
    pub fn server_url(&self) -> String {
        let host = match self.server.host.as_str() {
            "0.0.0.0" | "::" => "127.0.0.1",
            host => host,
        };
        format!("http://{}:{}", host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        if self.server.cors_origins.is_empty() {
            info!("  cors: any origin");
        } else {
            info!("  cors: {}", self.server.cors_origins.join(", "));
        }
        info!(
            "  database: dir={}, max {} tenants, max {} connections/tenant, busy timeout {}s",
            self.database.dir,
            self.database.max_tenants,
            self.database.max_connections_per_tenant,
            self.database.busy_timeout_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  api: default tenant={}, default user={}",
            self.api.default_tenant_id, self.api.default_user_id
        );
        info!(
            "  validation: title={}, desc={}, question={}, questions/survey={}",
            self.validation.max_title_length,
            self.validation.max_description_length,
            self.validation.max_question_length,
            self.validation.max_questions_per_survey
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SV_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SV_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("SV_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);

        // Database
        Self::apply_env_string("SV_DATABASE_DIR", &mut self.database.dir);
        Self::apply_env_parse(
            "SV_DATABASE_MAX_CONNECTIONS_PER_TENANT",
            &mut self.database.max_connections_per_tenant,
        );
        Self::apply_env_parse(
            "SV_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );
        Self::apply_env_parse("SV_DATABASE_MAX_TENANTS", &mut self.database.max_tenants);

        // Logging
        Self::apply_env_parse("SV_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SV_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SV_LOG_FILE", &mut self.logging.file);

        // Api
        Self::apply_env_string("SV_API_DEFAULT_USER_ID", &mut self.api.default_user_id);
        Self::apply_env_string("SV_API_DEFAULT_TENANT_ID", &mut self.api.default_tenant_id);

        // Validation
        Self::apply_env_parse(
            "SV_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "SV_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );
        Self::apply_env_parse(
            "SV_VALIDATION_MAX_QUESTION_LENGTH",
            &mut self.validation.max_question_length,
        );
        Self::apply_env_parse(
            "SV_VALIDATION_MAX_QUESTIONS_PER_SURVEY",
            &mut self.validation.max_questions_per_survey,
        );
        Self::apply_env_parse(
            "SV_VALIDATION_MAX_INVITATIONS_PER_REQUEST",
            &mut self.validation.max_invitations_per_request,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Comma separated, blanks dropped
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
