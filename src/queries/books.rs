//! Book queries

use super::get_record;
use crate::core::{Query, QueryError, RecordSource, SortDirection};
use crate::entities::Book;
use uuid::Uuid;

/// The book with `id`
pub async fn get_by_id(store: &dyn RecordSource<Book>, id: &Uuid) -> Result<Book, QueryError> {
    get_record(store, id).await
}

/// Every book, alphabetically by title
pub async fn list_all(store: &dyn RecordSource<Book>) -> Result<Vec<Book>, QueryError> {
    let query = Query::new().order_by(|book: &Book| book.title.as_str().into(), SortDirection::Asc);
    Ok(store.query(&query).await?)
}
