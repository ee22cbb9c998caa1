//! Blog post record

use crate::core::{Query, Record, SortDirection};
use crate::entities::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

choice_enum!(
    /// Publication state of a post
    PostStatus, "status", {
        Published => ("published", "Published"),
        Draft => ("draft", "Draft"),
        Banned => ("banned", "Banned"),
    }
);

choice_enum!(
    /// Optional topic tag of a post
    Category, "category", {
        Home => ("home", "Home"),
        Work => ("work", "Work"),
        Dev => ("dev", "Development"),
    }
);

/// A blog post
///
/// `author` references a [`User`]; stores refuse to delete a user while any
/// post still points at them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Post {
    pub id: Uuid,

    #[validate(length(max = 256))]
    pub title: String,

    pub text: String,

    pub author: Uuid,

    pub status: PostStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    pub published_at: Option<DateTime<Utc>>,

    /// `None` means untagged
    pub category: Option<Category>,
}

impl Post {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        author: Uuid,
        status: PostStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            text: text.into(),
            author,
            status,
            created_at: now,
            updated_at: now,
            published_at: None,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Mark the post as published at `at`
    pub fn publish(mut self, at: DateTime<Utc>) -> Self {
        self.status = PostStatus::Published;
        self.published_at = Some(at);
        self
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Case-insensitive substring match on title or text
    ///
    /// `needle` must already be lower-cased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.text.to_lowercase().contains(needle)
    }

    /// Human-readable summary, e.g. `"Hello (Development), Ada"`
    pub fn describe(&self, author: &User) -> String {
        let category = self
            .category
            .map_or_else(|| "uncategorized".to_string(), |c| c.to_string());
        format!("{} ({}), {}", self.title, category, author.first_name)
    }
}

impl Record for Post {
    fn resource_name() -> &'static str {
        "posts"
    }

    fn resource_name_singular() -> &'static str {
        "post"
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
        Query::new().order_by(|post: &Post| post.published_at.into(), SortDirection::Desc)
    }
}
