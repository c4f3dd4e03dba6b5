use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewSchool, School};

/// Errors that can occur when reading or writing schools
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for school records
///
/// Each call maps to a single storage statement. Records are append-only:
/// there is no update or delete.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Persist a school and return its generated identifier
    async fn insert(&self, school: &NewSchool) -> Result<i64, StoreError>;

    /// Fetch every stored school
    async fn list_all(&self) -> Result<Vec<School>, StoreError>;

    /// Whether the backing storage is reachable
    async fn health_check(&self) -> Result<bool, StoreError>;
}
