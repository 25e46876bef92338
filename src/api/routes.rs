//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes, nested under `/api` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `POST /shorten` - Create an alias mapping
/// - `GET  /health`  - Database health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
}
