use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/css/style.css", get(handlers::style_css))
        // API
        .route("/health", get(handlers::health))
        .route("/api/primes", get(handlers::primes))
        // State and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
