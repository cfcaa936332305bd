//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Ad-hoc generation
        .route("/api/v1/gex/levels", post(handlers::generate_levels))
        // Symbols
        .route("/api/v1/gex/symbols", get(handlers::list_symbols))
        .route(
            "/api/v1/gex/symbols/{symbol}",
            get(handlers::get_symbol)
                .put(handlers::upsert_symbol)
                .delete(handlers::delete_symbol),
        )
        // Symbol levels
        .route(
            "/api/v1/gex/symbols/{symbol}/levels",
            get(handlers::get_symbol_levels),
        )
        .route(
            "/api/v1/gex/symbols/{symbol}/summary",
            get(handlers::get_symbol_summary),
        )
        .with_state(state)
}
