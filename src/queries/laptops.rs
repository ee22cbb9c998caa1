//! Laptop queries

use super::{get_record, provided};
use crate::core::{Choice, Query, QueryError, RecordSource, SortDirection};
use crate::entities::{Brand, Laptop};
use uuid::Uuid;

/// The laptop with `id`
pub async fn get_by_id(store: &dyn RecordSource<Laptop>, id: &Uuid) -> Result<Laptop, QueryError> {
    get_record(store, id).await
}

/// Laptops with at least one unit in stock, newest first
pub async fn list_in_stock(store: &dyn RecordSource<Laptop>) -> Result<Vec<Laptop>, QueryError> {
    let query = Query::new()
        .filter(Laptop::in_stock)
        .order_by(|laptop: &Laptop| laptop.created_at.into(), SortDirection::Desc);

    Ok(store.query(&query).await?)
}

/// Laptops of an optional brand costing at least an optional price, cheapest first
///
/// Empty parameters count as absent. An unknown brand or a price that is not
/// a finite, non-negative number is an invalid argument.
pub async fn filter(
    store: &dyn RecordSource<Laptop>,
    brand: Option<&str>,
    min_price: Option<&str>,
) -> Result<Vec<Laptop>, QueryError> {
    let brand = provided(brand).map(parse_brand).transpose()?;
    let min_price = provided(min_price).map(parse_min_price).transpose()?;

    let mut query = Query::new();

    if let Some(brand) = brand {
        query = query.filter(move |laptop: &Laptop| laptop.brand == brand);
    }

    if let Some(min_price) = min_price {
        query = query.filter(move |laptop: &Laptop| laptop.price >= min_price);
    }

    let query = query.order_by(|laptop: &Laptop| laptop.price.into(), SortDirection::Asc);

    Ok(store.query(&query).await?)
}

/// The most recently created laptop
///
/// Ties on `created_at` resolve to the one stored last.
pub async fn get_most_recent(store: &dyn RecordSource<Laptop>) -> Result<Laptop, QueryError> {
    let query =
        Query::new().order_by(|laptop: &Laptop| laptop.created_at.into(), SortDirection::Asc);

    store
        .query(&query)
        .await?
        .pop()
        .ok_or_else(|| QueryError::not_found("laptop"))
}

fn parse_brand(raw: &str) -> Result<Brand, QueryError> {
    raw.parse::<Brand>().map_err(|err| {
        let reason = format!("{}; expected one of {}", err, Brand::expected());
        QueryError::invalid_argument("brand", reason)
    })
}

fn parse_min_price(raw: &str) -> Result<f64, QueryError> {
    let price: f64 = raw.trim().parse().map_err(|_| {
        QueryError::invalid_argument("min_price", format!("'{}' is not a number", raw))
    })?;

    if !price.is_finite() {
        return Err(QueryError::invalid_argument(
            "min_price",
            format!("'{}' is not a finite number", raw),
        ));
    }

    if price < 0.0 {
        return Err(QueryError::invalid_argument(
            "min_price",
            format!("{} is negative", price),
        ));
    }

    Ok(price)
}
