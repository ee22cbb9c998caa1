//! HTTP handlers
//!
//! Handlers only translate between HTTP and the Query Layer: they pull raw
//! parameters out of the request, call the matching query, and project the
//! records to JSON. Every failure is a [`QueryError`], which renders as an
//! empty-bodied response.

pub mod books;
pub mod laptops;
pub mod posts;

use crate::core::{QueryError, Record};
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::{Json, response::IntoResponse};
use serde_json::{Value, json};
use uuid::Uuid;

/// Parse a path id; anything that is not a UUID cannot name a stored record
pub(crate) fn parse_id<T: Record>(raw: &str) -> Result<Uuid, QueryError> {
    Uuid::parse_str(raw).map_err(|_| QueryError::not_found(T::resource_name_singular()))
}

/// Unwrap query-string parameters, reporting a malformed query string as an
/// invalid argument
pub(crate) fn params<P>(extracted: Result<Query<P>, QueryRejection>) -> Result<P, QueryError> {
    extracted
        .map(|Query(params)| params)
        .map_err(|rejection| QueryError::invalid_argument("query string", rejection.body_text()))
}

/// Health check endpoint handler
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "challenges"
    }))
}

/// JSON projection of a single record
pub(crate) fn one<T: Record>(record: &T) -> Result<Json<Value>, QueryError> {
    Ok(Json(record.to_json()?))
}

/// JSON projection of a record list, order preserved
pub(crate) fn many<T: Record>(records: &[T]) -> Result<Json<Value>, QueryError> {
    Ok(Json(crate::core::to_json_array(records)?))
}
