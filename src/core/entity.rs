//! Record trait defining the core abstraction for all stored types

use crate::core::Query;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

/// Base trait for every record kind held by a store.
///
/// All records have:
/// - id: Unique identifier
/// - resource names used in URLs and error messages
/// - a JSON projection of their own fields
///
/// Records that carry automatic timestamps override [`Record::on_create`]
/// and [`Record::on_update`]; the store calls them with the current time.
pub trait Record: Clone + Serialize + Validate + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "laptops", "posts")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "laptop", "post")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Stamp creation metadata
    fn on_create(&mut self, _now: DateTime<Utc>) {}

    /// Stamp modification metadata
    ///
    /// `previous` is the stored version being replaced, so immutable fields
    /// such as `created_at` can be carried over.
    fn on_update(&mut self, _previous: &Self, _now: DateTime<Utc>) {}

    /// The ordering applied when an operation does not ask for one
    fn default_query() -> Query<Self> {
        Query::new()
    }

    /// Project the record to a JSON object containing exactly its own fields
    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Project a sequence of records to a JSON array
pub fn to_json_array<T: Record>(records: &[T]) -> serde_json::Result<Value> {
    records
        .iter()
        .map(Record::to_json)
        .collect::<serde_json::Result<Vec<_>>>()
        .map(Value::Array)
}
