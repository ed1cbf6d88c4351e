use sv_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    /// A stored row could not be mapped back into a model
    #[error("Corrupt row: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid tenant id: {tenant_id} {location}")]
    InvalidTenant {
        tenant_id: String,
        location: ErrorLocation,
    },

    /// Opening the tenant would provision a database past the configured limit
    #[error("Tenant limit reached: {tenant_id} (max {max_tenants}) {location}")]
    TenantLimit {
        tenant_id: String,
        max_tenants: usize,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
