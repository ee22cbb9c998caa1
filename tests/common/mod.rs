//! Shared setup for the HTTP tests
//!
//! Every app runs on a [`ManualClock`] that each helper advances before it
//! writes, so creation times are distinct and strictly increasing.

#![allow(dead_code)]

use axum_test::TestServer;
use challenges::prelude::*;
use chrono::{TimeDelta, TimeZone};

pub struct TestApp {
    pub server: TestServer,
    pub store: EntityStore,
    pub clock: ManualClock,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_recent_limit(3)
    }

    pub fn with_recent_limit(limit: usize) -> Self {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
        let shared: SharedClock = Arc::new(clock.clone());
        let store = EntityStore::in_memory_with_clock(shared.clone());

        let app = ServerBuilder::new()
            .with_store(store.clone())
            .with_clock(shared)
            .with_recent_limit(limit)
            .build()
            .expect("Failed to build app");
        let server = TestServer::new(app);

        Self {
            server,
            store,
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    fn tick(&self) {
        self.clock.advance(TimeDelta::minutes(1));
    }

    pub async fn add_laptop(&self, brand: Brand, price: f64, quantity: u16) -> Laptop {
        self.tick();
        let release = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        self.store
            .create_laptop(Laptop::new(brand, release, 16, 512, price, quantity))
            .await
            .unwrap()
    }

    pub async fn add_user(&self, username: &str, first_name: &str) -> User {
        self.tick();
        self.store
            .create_user(User::new(username, first_name, "Tester"))
            .await
            .unwrap()
    }

    pub async fn add_post(&self, post: Post) -> Post {
        self.tick();
        self.store.create_post(post).await.unwrap()
    }

    /// A published post whose publication lies `days_ago` days before now
    pub async fn add_published(&self, title: &str, author: &User, days_ago: i64) -> Post {
        let at = self.now() - TimeDelta::days(days_ago);
        self.add_post(Post::new(title, "", author.id, PostStatus::Draft).publish(at))
            .await
    }

    pub async fn add_book(&self, title: &str, isbn: &str) -> Book {
        self.store
            .create_book(Book::new(title, "Some Author", isbn))
            .await
            .unwrap()
    }
}

/// Values of `field` across a JSON array response
pub fn field<'a>(body: &'a Value, field: &str) -> Vec<&'a Value> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| &item[field])
        .collect()
}

/// String values of `field` across a JSON array response
pub fn strings<'a>(body: &'a Value, name: &str) -> Vec<&'a str> {
    field(body, name)
        .into_iter()
        .map(|value| value.as_str().expect("expected a string"))
        .collect()
}
