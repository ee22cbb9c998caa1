//! Shared handler state

use crate::core::SharedClock;
use crate::storage::EntityStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: EntityStore,
    /// Source of "now" for time-window queries
    pub clock: SharedClock,
    /// Size of the recent-published-posts listing
    pub recent_limit: usize,
}
