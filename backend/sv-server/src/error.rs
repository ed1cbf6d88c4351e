use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sv_config::ConfigError),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Invalid CORS origin '{origin}'")]
    CorsOrigin { origin: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
