//! Book endpoints

use super::{many, one, parse_id};
use crate::core::QueryError;
use crate::entities::Book;
use crate::queries::books as queries;
use crate::server::AppState;
use axum::Json;
use axum::extract::{Path, State};
use serde_json::Value;

/// GET /books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Value>, QueryError> {
    let books = queries::list_all(state.store.books()).await?;
    many(&books)
}

/// GET /books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, QueryError> {
    let id = parse_id::<Book>(&id)?;
    let book = queries::get_by_id(state.store.books(), &id).await?;
    one(&book)
}
