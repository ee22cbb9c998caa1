//! Book record

use crate::core::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// A book in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Book {
    pub id: Uuid,

    #[validate(length(max = 256))]
    pub title: String,

    #[validate(length(max = 256))]
    pub author_full_name: String,

    /// Ten-character ISBN
    #[validate(length(equal = 10))]
    pub isbn: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author_full_name: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author_full_name: author_full_name.into(),
            isbn: isbn.into(),
        }
    }
}

impl Record for Book {
    fn resource_name() -> &'static str {
        "books"
    }

    fn resource_name_singular() -> &'static str {
        "book"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
