//! YAML fixtures for seeding a store
//!
//! Users carry a `key` that posts use to name their author, so a fixture file
//! never has to spell out UUIDs.
//!
//! ```yaml
//! users:
//!   - key: ada
//!     username: ada
//!     first_name: Ada
//!     last_name: Lovelace
//! laptops:
//!   - brand: apple
//!     release_year: 2021-03-01
//!     ram: 16
//!     hdd: 512
//!     price: 1200.0
//!     quantity: 3
//! posts:
//!   - title: Hello
//!     text: First post
//!     author: ada
//!     status: published
//!     published_at: 2024-05-01T10:00:00Z
//!     category: dev
//! ```
//!
//! Entries with an explicit `created_at` are imported with that timestamp;
//! the rest are created and stamped by the store's clock, in file order.

use crate::config::ConfigError;
use crate::entities::{Book, Brand, Category, Laptop, Post, PostStatus, User};
use crate::storage::EntityStore;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub users: Vec<UserFixture>,
    pub books: Vec<BookFixture>,
    pub laptops: Vec<LaptopFixture>,
    pub posts: Vec<PostFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserFixture {
    pub key: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookFixture {
    pub title: String,
    pub author_full_name: String,
    pub isbn: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaptopFixture {
    pub brand: Brand,
    pub release_year: NaiveDate,
    pub ram: u16,
    pub hdd: u16,
    pub price: f64,
    pub quantity: u16,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostFixture {
    pub title: String,
    #[serde(default)]
    pub text: String,
    /// `key` of a user in the same file
    pub author: String,
    pub status: PostStatus,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// How many records of each kind were seeded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub books: usize,
    pub laptops: usize,
    pub posts: usize,
}

impl Fixtures {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let fixtures: Self = serde_yaml::from_str(yaml)?;
        fixtures.check_author_keys()?;
        Ok(fixtures)
    }

    /// Insert every fixture into `store`
    ///
    /// Users go first so posts can resolve their author keys.
    pub async fn seed(&self, store: &EntityStore) -> Result<SeedSummary> {
        self.check_author_keys()?;

        let mut authors: HashMap<&str, Uuid> = HashMap::new();
        for fixture in &self.users {
            let user = store
                .create_user(User::new(
                    fixture.username.as_str(),
                    fixture.first_name.as_str(),
                    fixture.last_name.as_str(),
                ))
                .await?;
            authors.insert(fixture.key.as_str(), user.id);
        }

        for fixture in &self.books {
            store
                .create_book(Book::new(
                    fixture.title.as_str(),
                    fixture.author_full_name.as_str(),
                    fixture.isbn.as_str(),
                ))
                .await?;
        }

        for fixture in &self.laptops {
            let mut laptop = Laptop::new(
                fixture.brand,
                fixture.release_year,
                fixture.ram,
                fixture.hdd,
                fixture.price,
                fixture.quantity,
            );
            match fixture.created_at {
                Some(created_at) => {
                    laptop.created_at = created_at;
                    laptop.updated_at = created_at;
                    store.import_laptop(laptop).await?;
                }
                None => {
                    store.create_laptop(laptop).await?;
                }
            }
        }

        for fixture in &self.posts {
            let author = authors
                .get(fixture.author.as_str())
                .copied()
                .ok_or_else(|| unknown_author(&fixture.title, &fixture.author))?;

            let mut post = Post::new(
                fixture.title.as_str(),
                fixture.text.as_str(),
                author,
                fixture.status,
            );
            post.category = fixture.category;
            post.published_at = fixture.published_at;

            match fixture.created_at {
                Some(created_at) => {
                    post.created_at = created_at;
                    post.updated_at = created_at;
                    store.import_post(post).await?;
                }
                None => {
                    store.create_post(post).await?;
                }
            }
        }

        let summary = SeedSummary {
            users: self.users.len(),
            books: self.books.len(),
            laptops: self.laptops.len(),
            posts: self.posts.len(),
        };
        tracing::info!(
            users = summary.users,
            books = summary.books,
            laptops = summary.laptops,
            posts = summary.posts,
            "fixtures loaded"
        );
        Ok(summary)
    }

    fn check_author_keys(&self) -> Result<(), ConfigError> {
        for post in &self.posts {
            if !self.users.iter().any(|user| user.key == post.author) {
                return Err(unknown_author(&post.title, &post.author));
            }
        }
        Ok(())
    }
}

fn unknown_author(title: &str, key: &str) -> ConfigError {
    ConfigError::Invalid(format!("post '{}' names unknown author '{}'", title, key))
}
