//! In-memory repository adapter.
//!
//! Backs the service when no database URL is configured and gives tests a
//! real [`Repository`] without I/O. Records live in an ordered map so paging
//! follows key order exactly like the SQL adapters.

use std::collections::BTreeMap;
use std::ops::Bound;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{Entity, Repository, RepositoryError};

/// Ordered map of entities behind an async lock.
#[derive(Debug)]
pub struct InMemoryRepository<E: Entity> {
    records: RwLock<BTreeMap<E::Key, E>>,
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<E: Entity> InMemoryRepository<E> {
    /// Empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-populated with `entities`; later keys win.
    pub fn from_entities(entities: impl IntoIterator<Item = E>) -> Self {
        let records = entities
            .into_iter()
            .map(|entity| (entity.key(), entity))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn find_by_id(&self, id: E::Key) -> Result<Option<E>, RepositoryError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_page(
        &self,
        after: Option<E::Key>,
        limit: usize,
    ) -> Result<Vec<E>, RepositoryError> {
        let lower = after.map_or(Bound::Unbounded, Bound::Excluded);
        let records = self.records.read().await;
        Ok(records
            .range((lower, Bound::Unbounded))
            .take(limit)
            .map(|(_, entity)| entity.clone())
            .collect())
    }

    async fn save(&self, entity: &E) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .insert(entity.key(), entity.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: E::Key) -> Result<bool, RepositoryError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }
}
