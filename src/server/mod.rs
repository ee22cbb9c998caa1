//! HTTP server: handlers, routes and the builder that wires them to a store

pub mod builder;
pub mod handlers;
pub mod router;
pub mod state;

pub use builder::ServerBuilder;
pub use router::build_router;
pub use state::AppState;
