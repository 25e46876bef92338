//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Returns `302 Found` with the stored URL in `Location`. The lookup is an
/// exact match on the path segment.
///
/// # Errors
///
/// Returns 404 Not Found if the alias was never created.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state.mapping_service.resolve_mapping(&alias).await?;

    let location = HeaderValue::from_str(&original_url).map_err(|e| {
        AppError::internal(format!("stored URL is not a valid Location header: {}", e))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
