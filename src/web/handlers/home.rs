//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::HeaderMap, response::IntoResponse};

use crate::state::AppState;
use crate::utils::base_url::origin_from_headers;

/// Template for the home page.
///
/// Renders `templates/index.html`: a URL field, an alias field prefixed with
/// the base URL, and a script that posts to `/api/shorten`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub alias_prefix: String,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let alias_prefix = state
        .mapping_service
        .get_shortened_url("", origin_from_headers(&headers));

    HomeTemplate { alias_prefix }
}
