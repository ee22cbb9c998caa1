//! In-memory implementation of RecordStore for testing and development

use crate::core::{
    Query, Record, RecordSource, RecordStore, SharedClock, StoreError, system_clock,
};
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory record store
///
/// Records are kept in insertion order, which is also the order queries use
/// to break ties. Uses an async RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryStore<T: Record> {
    records: Arc<RwLock<IndexMap<Uuid, T>>>,
    clock: SharedClock,
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store using the system clock
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    /// Create an empty store stamping records with `clock`
    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
            clock,
        }
    }

    fn validate(record: &T) -> Result<()> {
        record.validate().map_err(|errors| StoreError::Validation {
            resource: T::resource_name_singular(),
            errors,
        })?;
        Ok(())
    }

    async fn insert(&self, record: T) -> Result<T> {
        let mut records = self.records.write().await;

        let id = record.id();
        if records.contains_key(&id) {
            return Err(StoreError::AlreadyExists {
                resource: T::resource_name_singular(),
                id,
            }
            .into());
        }

        records.insert(id, record.clone());
        Ok(record)
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordSource<T> for InMemoryStore<T> {
    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn query(&self, query: &Query<T>) -> Result<Vec<T>> {
        let records = self.records.read().await;
        Ok(query.apply(records.values().cloned()))
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    async fn create(&self, mut record: T) -> Result<T> {
        record.on_create(self.clock.utc());
        Self::validate(&record)?;
        self.insert(record).await
    }

    async fn import(&self, record: T) -> Result<T> {
        Self::validate(&record)?;
        self.insert(record).await
    }

    async fn update(&self, id: &Uuid, mut record: T) -> Result<T> {
        if record.id() != *id {
            return Err(StoreError::IdMismatch {
                resource: T::resource_name_singular(),
                id: *id,
                found: record.id(),
            }
            .into());
        }

        let mut records = self.records.write().await;

        let previous = records.get(id).ok_or(StoreError::NotFound {
            resource: T::resource_name_singular(),
            id: *id,
        })?;

        record.on_update(previous, self.clock.utc());
        Self::validate(&record)?;

        if let Some(slot) = records.get_mut(id) {
            *slot = record.clone();
        }

        Ok(record)
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        records.shift_remove(id);
        Ok(())
    }

    fn as_source(&self) -> &dyn RecordSource<T> {
        self
    }
}
