//! One SQLite database per tenant.
//!
//! Each tenant (organization) gets its own database file under
//! `<base_path>/<tenant_id>/surveys.db`, so surveys of one tenant are never
//! visible through another tenant's pool.
//!
//! The number of tenant databases is capped: once `max_tenants` databases
//! exist under the base path, unknown tenant ids are refused instead of
//! provisioned. Existing tenants always open.

use crate::{DbError, MIGRATOR, Result};

use sv_core::ErrorLocation;

use std::collections::HashMap;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use tokio::sync::RwLock;

const DATABASE_FILENAME: &str = "surveys.db";
const MAX_TENANT_ID_LENGTH: usize = 64;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_MAX_TENANTS: usize = 100;

/// Tenant ids become directory names, so only `[A-Za-z0-9_-]{1,64}` is allowed.
pub fn is_valid_tenant_id(tenant_id: &str) -> bool {
    !tenant_id.is_empty()
        && tenant_id.len() <= MAX_TENANT_ID_LENGTH
        && tenant_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub struct TenantConnectionManager {
    pools: Arc<RwLock<HashMap<String, SqlitePool>>>,
    base_path: PathBuf,
    max_connections: u32,
    busy_timeout: Duration,
    max_tenants: usize,
}

impl TenantConnectionManager {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            pools: Arc::new(RwLock::new(HashMap::new())),
            base_path: base_path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            max_tenants: DEFAULT_MAX_TENANTS,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn with_max_tenants(mut self, max_tenants: usize) -> Self {
        self.max_tenants = max_tenants.max(1);
        self
    }

    pub async fn get_pool(&self, tenant_id: &str) -> Result<SqlitePool> {
        if !is_valid_tenant_id(tenant_id) {
            return Err(DbError::InvalidTenant {
                tenant_id: tenant_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // Fast path: pool already exists
        {
            let pools = self.pools.read().await;
            if let Some(pool) = pools.get(tenant_id) {
                return Ok(pool.clone());
            }
        }

        let mut pools = self.pools.write().await;

        // Another task may have created it while we waited for the write lock
        if let Some(pool) = pools.get(tenant_id) {
            return Ok(pool.clone());
        }

        if !self.is_provisioned(tenant_id).await
            && self.provisioned_tenant_count().await? >= self.max_tenants
        {
            warn!(
                "Refusing to provision tenant {}: limit of {} reached",
                tenant_id, self.max_tenants
            );
            return Err(DbError::TenantLimit {
                tenant_id: tenant_id.to_string(),
                max_tenants: self.max_tenants,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let pool = self.create_pool(tenant_id).await?;
        pools.insert(tenant_id.to_string(), pool.clone());

        Ok(pool)
    }

    /// Number of tenants with an open pool
    pub async fn open_pool_count(&self) -> usize {
        self.pools.read().await.len()
    }

    /// Close every cached pool
    pub async fn close_all(&self) {
        let mut pools = self.pools.write().await;
        for (tenant_id, pool) in pools.drain() {
            pool.close().await;
            info!("Closed database pool for tenant {}", tenant_id);
        }
    }

    async fn create_pool(&self, tenant_id: &str) -> Result<SqlitePool> {
        let db_path = self.get_database_path(tenant_id);

        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create tenant directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(self.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;

        MIGRATOR.run(&pool).await.map_err(|e| DbError::Migration {
            message: format!("Migration failed for tenant {}: {}", tenant_id, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(
            "Opened database for tenant {} at {}",
            tenant_id,
            db_path.display()
        );

        Ok(pool)
    }

    async fn is_provisioned(&self, tenant_id: &str) -> bool {
        tokio::fs::try_exists(self.get_database_path(tenant_id))
            .await
            .unwrap_or(false)
    }

    /// Tenant directories under the base path that hold a database file
    async fn provisioned_tenant_count(&self) -> Result<usize> {
        let mut entries = match tokio::fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(Self::scan_error(e)),
        };

        let mut count = 0;
        while let Some(entry) = entries.next_entry().await.map_err(Self::scan_error)? {
            let db_path = entry.path().join(DATABASE_FILENAME);
            if tokio::fs::try_exists(&db_path).await.unwrap_or(false) {
                count += 1;
            }
        }

        Ok(count)
    }

    #[track_caller]
    fn scan_error(e: std::io::Error) -> DbError {
        DbError::Initialization {
            message: format!("Failed to scan tenant directory: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn get_database_path(&self, tenant_id: &str) -> PathBuf {
        self.base_path.join(tenant_id).join(DATABASE_FILENAME)
    }
}
