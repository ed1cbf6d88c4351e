pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::tenant_connection_manager::{TenantConnectionManager, is_valid_tenant_id};
pub use error::{DbError, Result};
pub use repositories::question_repository::QuestionRepository;
pub use repositories::survey_repository::SurveyRepository;

/// Embedded migrations, shared by the connection manager and tests
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
