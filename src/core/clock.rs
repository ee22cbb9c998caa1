//! Time source shared by stores and handlers
//!
//! Production code runs on [`DefaultClock`]; tests inject a [`ManualClock`]
//! so creation order and "last N days" windows are reproducible.

use chrono::{DateTime, Local, TimeDelta, Utc};
pub use mockable::{Clock, DefaultClock};
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared handle to a clock
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// A clock that only moves when told to
///
/// Clones share the same instant.
///
/// # Example
/// ```rust,ignore
/// let clock = ManualClock::new(Utc::now());
/// store.create_laptop(first).await?;
/// clock.advance(TimeDelta::minutes(1));
/// store.create_laptop(second).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(start)))
    }

    /// Move the clock forward (or backward, with a negative delta)
    pub fn advance(&self, delta: TimeDelta) {
        *self.lock_clock() += delta;
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// The wall clock, shared
pub fn system_clock() -> SharedClock {
    Arc::new(DefaultClock)
}
