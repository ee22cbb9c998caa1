//! Laptop endpoints

use super::{many, one, params, parse_id};
use crate::core::QueryError;
use crate::entities::Laptop;
use crate::queries::laptops as queries;
use crate::server::AppState;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub brand: Option<String>,
    pub min_price: Option<String>,
}

/// GET /laptops/{id}
pub async fn get_laptop(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, QueryError> {
    let id = parse_id::<Laptop>(&id)?;
    let laptop = queries::get_by_id(state.store.laptops(), &id).await?;
    one(&laptop)
}

/// GET /laptops/in-stock
pub async fn list_in_stock(State(state): State<AppState>) -> Result<Json<Value>, QueryError> {
    let laptops = queries::list_in_stock(state.store.laptops()).await?;
    many(&laptops)
}

/// GET /laptops/filter?brand=&min_price=
pub async fn filter_laptops(
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<Value>, QueryError> {
    let FilterParams { brand, min_price } = params(query)?;
    let laptops = queries::filter(
        state.store.laptops(),
        brand.as_deref(),
        min_price.as_deref(),
    )
    .await?;
    many(&laptops)
}

/// GET /laptops/last
pub async fn get_most_recent(State(state): State<AppState>) -> Result<Json<Value>, QueryError> {
    let laptop = queries::get_most_recent(state.store.laptops()).await?;
    one(&laptop)
}
