//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Home page with the shorten form
//! - `GET  /{alias}`      - Alias redirect
//! - `POST /api/shorten`  - Create an alias mapping
//! - `GET  /api/health`   - Health check
//!
//! `/{alias}` matches a single path segment, so `/api/...` paths never reach
//! the redirect handler.

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and request tracing.
pub fn router(state: AppState) -> Router {
    web::routes::public_routes()
        .route("/{alias}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] with trailing slashes trimmed
/// before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
