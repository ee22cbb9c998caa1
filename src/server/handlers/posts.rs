//! Post endpoints

use super::{many, params};
use crate::core::QueryError;
use crate::queries::posts as queries;
use crate::server::AppState;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoriesParams {
    pub categories: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LastDaysParams {
    pub last_days: Option<String>,
}

/// GET /posts/last
pub async fn list_recent_published(
    State(state): State<AppState>,
) -> Result<Json<Value>, QueryError> {
    let posts = queries::list_recent_published(state.store.posts(), state.recent_limit).await?;
    many(&posts)
}

/// GET /posts/search?query=
pub async fn search_posts(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>, QueryError> {
    let SearchParams { query } = params(query)?;
    let posts = queries::search(state.store.posts(), query.as_deref()).await?;
    many(&posts)
}

/// GET /posts/untagged
pub async fn list_untagged(State(state): State<AppState>) -> Result<Json<Value>, QueryError> {
    let posts = queries::list_untagged(state.store.posts(), state.store.users()).await?;
    many(&posts)
}

/// GET /posts/categories?categories=
pub async fn list_by_categories(
    State(state): State<AppState>,
    query: Result<Query<CategoriesParams>, QueryRejection>,
) -> Result<Json<Value>, QueryError> {
    let CategoriesParams { categories } = params(query)?;
    let posts = queries::list_by_categories(state.store.posts(), categories.as_deref()).await?;
    many(&posts)
}

/// GET /posts/last-days?last_days=
pub async fn list_recent(
    State(state): State<AppState>,
    query: Result<Query<LastDaysParams>, QueryRejection>,
) -> Result<Json<Value>, QueryError> {
    let LastDaysParams { last_days } = params(query)?;
    let posts = queries::list_recent(
        state.store.posts(),
        last_days.as_deref(),
        state.clock.utc(),
    )
    .await?;
    many(&posts)
}
