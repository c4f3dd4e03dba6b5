use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{NewSchool, School};
use crate::services::store::{SchoolStore, StoreError};

/// Process-local store for development and tests
///
/// Identifiers start at 1 and increase by one per insert, like an
/// auto-increment column. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    schools: RwLock<Vec<School>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored schools
    pub async fn len(&self) -> usize {
        self.schools.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SchoolStore for InMemoryStore {
    async fn insert(&self, school: &NewSchool) -> Result<i64, StoreError> {
        let mut schools = self.schools.write().await;
        let id = schools.last().map_or(1, |last| last.id + 1);
        schools.push(school.clone().into_school(id));

        tracing::debug!("Stored school {} in memory ({} total)", id, schools.len());

        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<School>, StoreError> {
        Ok(self.schools.read().await.clone())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
