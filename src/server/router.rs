//! Route table

use super::AppState;
use super::handlers::{books, health_check, laptops, posts};
use crate::core::not_found;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build every API route
///
/// - GET /laptops/in-stock, /laptops/filter, /laptops/last, /laptops/{id}
/// - GET /posts/last, /posts/search, /posts/untagged, /posts/categories, /posts/last-days
/// - GET /books, /books/{id}
pub fn build_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/laptops/in-stock", get(laptops::list_in_stock))
        .route("/laptops/filter", get(laptops::filter_laptops))
        .route("/laptops/last", get(laptops::get_most_recent))
        .route("/laptops/{id}", get(laptops::get_laptop))
        .route("/posts/last", get(posts::list_recent_published))
        .route("/posts/search", get(posts::search_posts))
        .route("/posts/untagged", get(posts::list_untagged))
        .route("/posts/categories", get(posts::list_by_categories))
        .route("/posts/last-days", get(posts::list_recent))
        .route("/books", get(books::list_books))
        .route("/books/{id}", get(books::get_book))
        .with_state(state)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Assemble the full application router
///
/// Unknown paths answer with an empty 404, matching the error responses.
pub fn build_router(state: AppState, custom_routes: Vec<Router>) -> Router {
    let mut app = build_health_routes().merge(build_api_routes(state));

    for custom_router in custom_routes {
        app = app.merge(custom_router);
    }

    app.fallback(|| async { not_found() })
        .layer(TraceLayer::new_for_http())
}
