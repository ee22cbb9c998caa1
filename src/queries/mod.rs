//! Query Layer: the filtering and ordering behind every endpoint
//!
//! Each function takes the relevant store(s) plus raw request parameters and
//! returns either records in their final order or a [`QueryError`]. Parameter
//! parsing lives here rather than in the handlers so that every rule about
//! what counts as an invalid argument is in one place.
//!
//! Nothing in this module mutates a store.

pub mod books;
pub mod laptops;
pub mod posts;

use crate::core::{QueryError, Record, RecordSource};
use uuid::Uuid;

/// Fetch one record by id or report NotFound
pub async fn get_record<T: Record>(
    store: &dyn RecordSource<T>,
    id: &Uuid,
) -> Result<T, QueryError> {
    store
        .get(id)
        .await?
        .ok_or_else(|| QueryError::not_found(T::resource_name_singular()))
}

/// Turn an empty result into NotFound
pub(crate) fn require_any<T: Record>(records: Vec<T>) -> Result<Vec<T>, QueryError> {
    if records.is_empty() {
        Err(QueryError::not_found(T::resource_name_singular()))
    } else {
        Ok(records)
    }
}

/// Treat an absent or empty parameter the same way
pub(crate) fn provided(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}
