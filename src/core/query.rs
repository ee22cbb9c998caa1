//! Query builder for filtering, ordering and limiting record collections
//!
//! A [`Query`] is a backend-agnostic description of a read: a conjunction of
//! predicates, an ordered list of sort keys and an optional limit. Stores
//! that can push the query down to their engine may do so; the in-memory
//! store simply calls [`Query::apply`].
//!
//! # Example
//! ```rust,ignore
//! let query = Query::<Laptop>::new()
//!     .filter(|laptop| laptop.quantity > 0)
//!     .order_by(|laptop| laptop.created_at.into(), SortDirection::Desc)
//!     .limit(10);
//!
//! let laptops = store.laptops().query(&query).await?;
//! ```

use crate::core::field::FieldValue;
use std::cmp::Ordering;
use std::fmt;

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;
type SortKey<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// Sort direction for a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

struct SortSpec<T> {
    key: SortKey<T>,
    direction: SortDirection,
}

/// A read over a collection of `T`
pub struct Query<T> {
    filters: Vec<Predicate<T>>,
    ordering: Vec<SortSpec<T>>,
    limit: Option<usize>,
}

impl<T> Query<T> {
    /// An unfiltered, unordered, unlimited query
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            ordering: Vec::new(),
            limit: None,
        }
    }

    /// Keep only records matching `predicate` (AND-combined with earlier filters)
    pub fn filter(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.filters.push(Box::new(predicate));
        self
    }

    /// Order by `key`
    ///
    /// The first call sets the primary key; subsequent calls only break ties
    /// left by the earlier ones.
    pub fn order_by(
        mut self,
        key: impl Fn(&T) -> FieldValue + Send + Sync + 'static,
        direction: SortDirection,
    ) -> Self {
        self.ordering.push(SortSpec {
            key: Box::new(key),
            direction,
        });
        self
    }

    /// Keep at most `limit` records after ordering
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check a single record against every filter
    pub fn matches(&self, record: &T) -> bool {
        self.filters.iter().all(|predicate| predicate(record))
    }

    /// Compare two records using the configured ordering
    ///
    /// Nulls sort last regardless of direction.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for ordering in &self.ordering {
            let left = (ordering.key)(a);
            let right = (ordering.key)(b);

            let result = match (left.is_null(), right.is_null()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => match ordering.direction {
                    SortDirection::Asc => left.sort_cmp(&right),
                    SortDirection::Desc => right.sort_cmp(&left),
                },
            };

            if result != Ordering::Equal {
                return result;
            }
        }

        Ordering::Equal
    }

    /// Run the query over an in-memory collection
    ///
    /// Sorting is stable, so records that compare equal keep the order in
    /// which `records` yielded them.
    pub fn apply(&self, records: impl IntoIterator<Item = T>) -> Vec<T> {
        let mut result: Vec<T> = records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect();

        if !self.ordering.is_empty() {
            result.sort_by(|a, b| self.compare(a, b));
        }

        if let Some(limit) = self.limit {
            result.truncate(limit);
        }

        result
    }
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filters", &self.filters.len())
            .field(
                "ordering",
                &self
                    .ordering
                    .iter()
                    .map(|ordering| ordering.direction)
                    .collect::<Vec<_>>(),
            )
            .field("limit", &self.limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        price: f64,
        rank: Option<i64>,
    }

    fn item(name: &'static str, price: f64, rank: Option<i64>) -> Item {
        Item { name, price, rank }
    }

    fn names(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.name).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let items = vec![item("a", 1.0, None), item("b", 2.0, None)];
        let result = Query::new().apply(items.clone());
        assert_eq!(result, items);
    }

    #[test]
    fn test_filters_are_and_combined() {
        let items = vec![
            item("a", 1.0, Some(1)),
            item("b", 20.0, Some(2)),
            item("c", 30.0, None),
        ];
        let result = Query::new()
            .filter(|i: &Item| i.price > 10.0)
            .filter(|i: &Item| i.rank.is_some())
            .apply(items);
        assert_eq!(names(&result), vec!["b"]);
    }

    #[test]
    fn test_order_by_desc_then_limit() {
        let items = vec![
            item("a", 1.0, None),
            item("b", 3.0, None),
            item("c", 2.0, None),
        ];
        let result = Query::new()
            .order_by(|i: &Item| i.price.into(), SortDirection::Desc)
            .limit(2)
            .apply(items);
        assert_eq!(names(&result), vec!["b", "c"]);
    }

    #[test]
    fn test_secondary_key_breaks_ties() {
        let items = vec![
            item("a", 1.0, Some(2)),
            item("b", 1.0, Some(1)),
            item("c", 0.5, Some(3)),
        ];
        let result = Query::new()
            .order_by(|i: &Item| i.price.into(), SortDirection::Asc)
            .order_by(|i: &Item| i.rank.into(), SortDirection::Asc)
            .apply(items);
        assert_eq!(names(&result), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_nulls_sort_last_in_both_directions() {
        let items = vec![
            item("none", 0.0, None),
            item("low", 0.0, Some(1)),
            item("high", 0.0, Some(9)),
        ];

        let asc = Query::new()
            .order_by(|i: &Item| i.rank.into(), SortDirection::Asc)
            .apply(items.clone());
        assert_eq!(names(&asc), vec!["low", "high", "none"]);

        let desc = Query::new()
            .order_by(|i: &Item| i.rank.into(), SortDirection::Desc)
            .apply(items);
        assert_eq!(names(&desc), vec!["high", "low", "none"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let items = vec![
            item("first", 5.0, None),
            item("second", 5.0, None),
            item("third", 5.0, None),
        ];
        let result = Query::new()
            .order_by(|i: &Item| i.price.into(), SortDirection::Desc)
            .apply(items);
        assert_eq!(names(&result), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_limit_zero() {
        let items = vec![item("a", 1.0, None)];
        assert!(Query::new().limit(0).apply(items).is_empty());
    }
}
