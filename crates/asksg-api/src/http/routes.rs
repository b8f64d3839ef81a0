//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{ask, search};
use crate::http::monitoring;
use crate::state::AppState;

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// POST /search  - Ranked collections for a question
/// POST /ask     - Text answer with source collection ids
/// GET  /health  - Health check with component details
/// GET  /ready   - Readiness check
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search", post(search))
        .route("/ask", post(ask))
        .route("/health", get(monitoring::health_check))
        .route("/ready", get(monitoring::readiness_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
