//! Handler for the shorten endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::HeaderMap};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::origin_from_headers;

/// Creates a mapping from a user-chosen alias to a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a/b", "alias": "cs391" }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "shortenedUrl": "https://sho.rt/cs391" }
/// ```
///
/// # Errors
///
/// - 400 `{ "error": "URL and alias are required" }`
/// - 400 `{ "error": "Invalid URL. Must start with http:// or https://" }`
/// - 400 `{ "error": "This alias is already taken. Please choose another one." }`
/// - 500 `{ "error": "Something went wrong: ..." }` on store failures or an
///   unreadable body
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;

    let url = payload.url.unwrap_or_default();
    let alias = payload.alias.unwrap_or_default();

    let mapping = state.mapping_service.create_mapping(&url, &alias).await?;

    let shortened_url = state
        .mapping_service
        .get_shortened_url(&mapping.alias, origin_from_headers(&headers));

    Ok(Json(ShortenResponse {
        success: true,
        shortened_url,
    }))
}
