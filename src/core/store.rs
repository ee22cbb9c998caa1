//! Store traits for record collections
//!
//! Reads and writes are separate traits. The Query Layer only ever needs
//! [`RecordSource`], so any backend able to filter, order and limit (an
//! in-memory list, a relational table, a document store) can serve the
//! endpoints, and code holding a source cannot write through it.

use crate::core::{Query, Record};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Read access to a single record kind
#[async_trait]
pub trait RecordSource<T: Record>: Send + Sync {
    /// Get a record by ID
    async fn get(&self, id: &Uuid) -> Result<Option<T>>;

    /// List all records in store order
    async fn list(&self) -> Result<Vec<T>>;

    /// Run a filtered, ordered, limited read
    async fn query(&self, query: &Query<T>) -> Result<Vec<T>>;

    /// Count the records `query` would return
    async fn count(&self, query: &Query<T>) -> Result<usize> {
        Ok(self.query(query).await?.len())
    }
}

/// Storage operations for a single record kind
///
/// Implementations provide CRUD operations on top of [`RecordSource`].
/// The framework is agnostic to the underlying storage mechanism.
#[async_trait]
pub trait RecordStore<T: Record>: RecordSource<T> {
    /// Validate, timestamp and insert a new record
    async fn create(&self, record: T) -> Result<T>;

    /// Insert a record as-is, keeping whatever timestamps it carries
    ///
    /// Used when loading fixtures. The record is still validated.
    async fn import(&self, record: T) -> Result<T>;

    /// Replace the record stored under `id`, refreshing its modification metadata
    ///
    /// `record` must carry the same id.
    async fn update(&self, id: &Uuid, record: T) -> Result<T>;

    /// Delete a record; unknown ids are ignored
    async fn delete(&self, id: &Uuid) -> Result<()>;

    /// This store as a read-only source
    fn as_source(&self) -> &dyn RecordSource<T>;
}
