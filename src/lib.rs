//! # Challenges
//!
//! Read-only HTTP endpoints that filter, sort and search three kinds of
//! records: books, laptops and blog posts (with their authors).
//!
//! ## Layers
//!
//! - **Records** ([`entities`]): typed records with validation and automatic
//!   timestamps, plus closed choice sets such as [`entities::Brand`].
//! - **Stores** ([`storage`]): a [`core::RecordStore`] per record kind, bundled
//!   in [`storage::EntityStore`] which owns every write and enforces
//!   cross-record rules. Readers see a [`core::RecordSource`].
//! - **Query Layer** ([`queries`]): one function per endpoint, owning parameter
//!   parsing, filtering and ordering. Failures are [`core::QueryError`]s.
//! - **HTTP** ([`server`]): thin axum handlers mapping `InvalidArgument` to 403
//!   and `NotFound` to 404, both with empty bodies.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use challenges::prelude::*;
//!
//! let store = EntityStore::in_memory();
//! store
//!     .create_laptop(Laptop::new(Brand::Apple, release, 16, 512, 1200.0, 3))
//!     .await?;
//!
//! ServerBuilder::new()
//!     .with_store(store)
//!     .serve("127.0.0.1:3000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod fixtures;
pub mod queries;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Choice, ChoiceError, Clock, DefaultClock, FieldValue, ManualClock, Query, QueryError,
        Record, RecordSource, RecordStore, SharedClock, SortDirection, StoreError, system_clock,
        to_json_array,
    };

    // === Records ===
    pub use crate::entities::{Book, Brand, Category, Laptop, Post, PostStatus, User};

    // === Macros ===
    pub use crate::choice_enum;

    // === Storage ===
    pub use crate::storage::{EntityStore, InMemoryStore};

    // === Configuration ===
    pub use crate::config::{AppConfig, ConfigError};
    pub use crate::fixtures::Fixtures;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === Common external types ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value, json};
    pub use uuid::Uuid;

    pub use std::sync::Arc;
}
