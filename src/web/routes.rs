//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::home_handler;
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Form for creating a shortened link
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}
