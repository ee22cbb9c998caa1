//! Laptop record

use crate::core::{Choice, Query, Record, SortDirection};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::{Validate, ValidationError};

choice_enum!(
    /// Laptop manufacturer
    Brand, "brand", {
        Apple => ("apple", "Apple"),
        Hp => ("hp", "Hewlett-Packard"),
        Acer => ("acer", "Acer"),
        Lenovo => ("lenovo", "Lenovo"),
    }
);

/// A laptop model held in stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Laptop {
    pub id: Uuid,

    pub brand: Brand,

    /// Release date; only the year is meaningful
    pub release_year: NaiveDate,

    /// RAM size in GB
    pub ram: u16,

    /// HDD size in GB
    pub hdd: u16,

    #[validate(custom(function = "validate_price"))]
    pub price: f64,

    /// Units in stock
    pub quantity: u16,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("non_negative_price"))
    }
}

impl Laptop {
    pub fn new(
        brand: Brand,
        release_year: NaiveDate,
        ram: u16,
        hdd: u16,
        price: f64,
        quantity: u16,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            brand,
            release_year,
            ram,
            hdd,
            price,
            quantity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Year of release
    pub fn year(&self) -> i32 {
        self.release_year.year()
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

impl Record for Laptop {
    fn resource_name() -> &'static str {
        "laptops"
    }

    fn resource_name_singular() -> &'static str {
        "laptop"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn on_create(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }

    fn on_update(&mut self, previous: &Self, now: DateTime<Utc>) {
        self.created_at = previous.created_at;
        self.updated_at = now;
    }

    fn default_query() -> Query<Self> {
        Query::new().order_by(|laptop: &Laptop| laptop.release_year.into(), SortDirection::Desc)
    }
}

impl fmt::Display for Laptop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/RAM {}GB/HDD {}GB",
            self.brand.label(),
            self.year(),
            self.ram,
            self.hdd
        )
    }
}
