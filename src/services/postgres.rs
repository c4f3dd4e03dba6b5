use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::models::{NewSchool, School};
use crate::services::store::{SchoolStore, StoreError};

/// PostgreSQL-backed school storage
///
/// The `schools` table is created by the embedded migrations when the
/// client connects, so a fresh database is usable straight away.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let url = settings
            .url
            .as_deref()
            .ok_or_else(|| StoreError::Unavailable("database.url is not set".to_string()))?;

        tracing::info!(
            max_connections = settings.max_connections,
            "Connecting to PostgreSQL"
        );

        Self::new(
            url,
            settings.max_connections,
            settings.min_connections,
            Duration::from_secs(settings.acquire_timeout_secs),
            Duration::from_secs(settings.idle_timeout_secs),
        )
        .await
    }
}

#[async_trait]
impl SchoolStore for PostgresClient {
    async fn insert(&self, school: &NewSchool) -> Result<i64, StoreError> {
        let query = r#"
            INSERT INTO schools (name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id
        "#;

        let id: i64 = sqlx::query_scalar(query)
            .bind(&school.name)
            .bind(&school.address)
            .bind(school.latitude)
            .bind(school.longitude)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!("Inserted school {} ({})", id, school.name);

        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<School>, StoreError> {
        let query = r#"
            SELECT id, name, address, latitude, longitude
            FROM schools
            ORDER BY id
        "#;

        let schools = sqlx::query_as::<_, School>(query)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Fetched {} schools", schools.len());

        Ok(schools)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
