//! Field values used as sort keys

use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;
use uuid::Uuid;

/// A polymorphic field value that can hold different types
///
/// Queries order records by projecting each one to a `FieldValue` and
/// comparing the results with [`FieldValue::sort_cmp`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    Null,
}

impl FieldValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Total ordering between two values
    ///
    /// Values of the same variant compare naturally (floats via
    /// `f64::total_cmp`). `Null` is greater than everything else. Mixed
    /// variants fall back to a fixed variant rank so the order stays total.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        use FieldValue::*;

        match (self, other) {
            (String(a), String(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Integer(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Boolean(a), Boolean(b)) => a.cmp(b),
            (Uuid(a), Uuid(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (Null, Null) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::String(_) => 0,
            FieldValue::Integer(_) | FieldValue::Float(_) => 1,
            FieldValue::Boolean(_) => 2,
            FieldValue::Uuid(_) => 3,
            FieldValue::DateTime(_) => 4,
            FieldValue::Date(_) => 5,
            FieldValue::Null => u8::MAX,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u16> for FieldValue {
    fn from(value: u16) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::Uuid(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTime(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::from("test");
        assert_eq!(value, FieldValue::String("test".to_string()));
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_from_option() {
        let none: Option<DateTime<Utc>> = None;
        assert!(FieldValue::from(none).is_null());
        assert_eq!(FieldValue::from(Some(7_i64)), FieldValue::Integer(7));
    }

    #[test]
    fn test_null_sorts_after_everything() {
        let now = FieldValue::from(Utc::now());
        assert_eq!(FieldValue::Null.sort_cmp(&now), Ordering::Greater);
        assert_eq!(now.sort_cmp(&FieldValue::Null), Ordering::Less);
        assert_eq!(FieldValue::Null.sort_cmp(&FieldValue::Null), Ordering::Equal);
    }

    #[test]
    fn test_float_ordering_is_total() {
        let cheap = FieldValue::from(499.99);
        let pricey = FieldValue::from(1200.0);
        assert_eq!(cheap.sort_cmp(&pricey), Ordering::Less);
        assert_eq!(FieldValue::from(3_i64).sort_cmp(&FieldValue::from(2.5)), Ordering::Greater);
    }

    #[test]
    fn test_datetime_ordering() {
        let earlier = Utc::now();
        let later = earlier + TimeDelta::seconds(1);
        assert_eq!(
            FieldValue::from(earlier).sort_cmp(&FieldValue::from(later)),
            Ordering::Less
        );
    }
}
