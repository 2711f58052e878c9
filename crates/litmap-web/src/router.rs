//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    chart::api_chart,
    explorer::explorer_page,
    facets::{api_fields, api_levels},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(explorer_page))
        // API endpoints
        .route("/api/chart", get(api_chart))
        .route("/api/levels", get(api_levels))
        .route("/api/fields", get(api_fields))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
