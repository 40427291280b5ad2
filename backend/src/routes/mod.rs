//! Route definitions for the N-Min Finder API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // N-th minimum lookup
        .route("/find-nth-min", get(handlers::find_nth_minimum))
}
