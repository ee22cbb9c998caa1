//! Aggregated store for all record kinds
//!
//! Bundles one [`RecordStore`] per record kind and enforces the rules that
//! span more than one collection: a post's author must exist, and a user
//! cannot be deleted while posts still reference them.
//!
//! The per-kind stores are private. Readers get a [`RecordSource`] through
//! the accessors; every write goes through the methods below. Writes that
//! check another collection first run under one lock, so no post can slip
//! in between the reference check and the write it guards.

use crate::core::{Query, RecordSource, RecordStore, SharedClock, StoreError, system_clock};
use crate::entities::{Book, Laptop, Post, User};
use crate::storage::InMemoryStore;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Aggregated store containing all record stores
#[derive(Clone)]
pub struct EntityStore {
    books: Arc<dyn RecordStore<Book>>,
    laptops: Arc<dyn RecordStore<Laptop>>,
    posts: Arc<dyn RecordStore<Post>>,
    users: Arc<dyn RecordStore<User>>,
    references: Arc<Mutex<()>>,
}

impl EntityStore {
    /// Assemble a store from individual backends
    pub fn new(
        books: Arc<dyn RecordStore<Book>>,
        laptops: Arc<dyn RecordStore<Laptop>>,
        posts: Arc<dyn RecordStore<Post>>,
        users: Arc<dyn RecordStore<User>>,
    ) -> Self {
        Self {
            books,
            laptops,
            posts,
            users,
            references: Arc::new(Mutex::new(())),
        }
    }

    /// In-memory backends on the system clock
    pub fn in_memory() -> Self {
        Self::in_memory_with_clock(system_clock())
    }

    /// In-memory backends sharing `clock`
    pub fn in_memory_with_clock(clock: SharedClock) -> Self {
        Self::new(
            Arc::new(InMemoryStore::<Book>::with_clock(clock.clone())),
            Arc::new(InMemoryStore::<Laptop>::with_clock(clock.clone())),
            Arc::new(InMemoryStore::<Post>::with_clock(clock.clone())),
            Arc::new(InMemoryStore::<User>::with_clock(clock)),
        )
    }

    pub fn books(&self) -> &dyn RecordSource<Book> {
        self.books.as_source()
    }

    pub fn laptops(&self) -> &dyn RecordSource<Laptop> {
        self.laptops.as_source()
    }

    pub fn posts(&self) -> &dyn RecordSource<Post> {
        self.posts.as_source()
    }

    pub fn users(&self) -> &dyn RecordSource<User> {
        self.users.as_source()
    }

    pub async fn create_book(&self, book: Book) -> Result<Book> {
        self.books.create(book).await
    }

    pub async fn create_laptop(&self, laptop: Laptop) -> Result<Laptop> {
        self.laptops.create(laptop).await
    }

    /// Insert a laptop keeping its timestamps
    pub async fn import_laptop(&self, laptop: Laptop) -> Result<Laptop> {
        self.laptops.import(laptop).await
    }

    pub async fn update_laptop(&self, id: &Uuid, laptop: Laptop) -> Result<Laptop> {
        self.laptops.update(id, laptop).await
    }

    pub async fn create_user(&self, user: User) -> Result<User> {
        self.users.create(user).await
    }

    /// Delete a user unless posts still reference them
    pub async fn delete_user(&self, id: &Uuid) -> Result<()> {
        let _guard = self.references.lock().await;

        let author = *id;
        let referencing = self
            .posts
            .count(&Query::new().filter(move |post: &Post| post.author == author))
            .await?;

        if referencing > 0 {
            tracing::debug!(user_id = %id, posts = referencing, "refusing to delete user");
            return Err(StoreError::Protected {
                resource: "user",
                id: *id,
                referenced_by: "posts",
                count: referencing,
            }
            .into());
        }

        self.users.delete(id).await
    }

    /// Create a post after checking its author exists
    pub async fn create_post(&self, post: Post) -> Result<Post> {
        let _guard = self.references.lock().await;
        self.ensure_author(&post).await?;
        self.posts.create(post).await
    }

    /// Import a post (keeping its timestamps) after checking its author exists
    pub async fn import_post(&self, post: Post) -> Result<Post> {
        let _guard = self.references.lock().await;
        self.ensure_author(&post).await?;
        self.posts.import(post).await
    }

    /// Update a post after checking its (possibly new) author exists
    pub async fn update_post(&self, id: &Uuid, post: Post) -> Result<Post> {
        let _guard = self.references.lock().await;
        self.ensure_author(&post).await?;
        self.posts.update(id, post).await
    }

    pub async fn delete_post(&self, id: &Uuid) -> Result<()> {
        self.posts.delete(id).await
    }

    async fn ensure_author(&self, post: &Post) -> Result<()> {
        if self.users.get(&post.author).await?.is_none() {
            return Err(StoreError::MissingReference {
                resource: "post",
                target: "user",
                id: post.author,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
