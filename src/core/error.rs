//! Typed errors for queries and stores
//!
//! # Error Categories
//!
//! - [`QueryError`]: what the Query Layer reports to its callers. Only two
//!   domain kinds exist, [`QueryError::InvalidArgument`] (HTTP 403) and
//!   [`QueryError::NotFound`] (HTTP 404). Anything coming out of the store is
//!   passed through unchanged as [`QueryError::Storage`].
//! - [`StoreError`]: rule violations raised by stores while writing records
//!   (unknown ids, protected references, failed validation). Stores return
//!   them wrapped in `anyhow::Error`, so callers can `downcast_ref` them.
//!
//! Error responses carry no body; the status code is the whole contract.
//!
//! # Example
//!
//! ```rust,ignore
//! match laptops::filter(&store, Some("dell"), None).await {
//!     Err(QueryError::InvalidArgument { param, .. }) => assert_eq!(param, "brand"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the Query Layer
#[derive(Debug, Error)]
pub enum QueryError {
    /// A request parameter is malformed or not allowed
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument { param: &'static str, reason: String },

    /// Nothing matched, or the requested id does not exist
    #[error("no {resource} found")]
    NotFound { resource: &'static str },

    /// The store failed; not part of the query taxonomy
    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),

    /// A record could not be projected to JSON
    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QueryError {
    pub fn invalid_argument(param: &'static str, reason: impl Into<String>) -> Self {
        QueryError::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        QueryError::NotFound { resource }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QueryError::InvalidArgument { .. } => StatusCode::FORBIDDEN,
            QueryError::NotFound { .. } => StatusCode::NOT_FOUND,
            QueryError::Storage(_) | QueryError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            QueryError::NotFound { .. } => "NOT_FOUND",
            QueryError::Storage(_) => "STORAGE_ERROR",
            QueryError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        match &self {
            QueryError::InvalidArgument { .. } => {
                tracing::debug!(code = self.error_code(), "{}", self);
                forbidden()
            }
            QueryError::NotFound { .. } => {
                tracing::debug!(code = self.error_code(), "{}", self);
                not_found()
            }
            QueryError::Storage(_) | QueryError::Serialization(_) => {
                tracing::error!(code = self.error_code(), "{}", self);
                empty_response(self.status_code())
            }
        }
    }
}

/// Empty-bodied response with the given status
pub fn empty_response(status: StatusCode) -> Response {
    status.into_response()
}

/// Empty 404 response
pub fn not_found() -> Response {
    empty_response(StatusCode::NOT_FOUND)
}

/// Empty 403 response
pub fn forbidden() -> Response {
    empty_response(StatusCode::FORBIDDEN)
}

/// Errors raised by stores while writing records
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record to update does not exist
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: &'static str, id: Uuid },

    /// A replacement record carries a different id than the one it replaces
    #[error("{resource} '{id}' cannot be replaced by a record with id '{found}'")]
    IdMismatch {
        resource: &'static str,
        id: Uuid,
        found: Uuid,
    },

    /// A record with the same id is already stored
    #[error("{resource} with id '{id}' already exists")]
    AlreadyExists { resource: &'static str, id: Uuid },

    /// Deletion blocked because other records still reference this one
    #[error("cannot delete {resource} '{id}': still referenced by {count} {referenced_by}")]
    Protected {
        resource: &'static str,
        id: Uuid,
        referenced_by: &'static str,
        count: usize,
    },

    /// A required reference points at a record that does not exist
    #[error("{resource} references missing {target} '{id}'")]
    MissingReference {
        resource: &'static str,
        target: &'static str,
        id: Uuid,
    },

    /// Field validation failed
    #[error("invalid {resource}: {errors}")]
    Validation {
        resource: &'static str,
        errors: validator::ValidationErrors,
    },
}
