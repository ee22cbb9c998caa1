//! Storage implementations

pub mod entity_store;
pub mod in_memory;

pub use entity_store::EntityStore;
pub use in_memory::InMemoryStore;
