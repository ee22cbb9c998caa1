//! User record (post authors)

use crate::core::Record;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A user who can author posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: Uuid,

    #[validate(length(min = 1, max = 150))]
    pub username: String,

    #[validate(length(max = 150))]
    pub first_name: String,

    #[validate(length(max = 150))]
    pub last_name: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Record for User {
    fn resource_name() -> &'static str {
        "users"
    }

    fn resource_name_singular() -> &'static str {
        "user"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}
