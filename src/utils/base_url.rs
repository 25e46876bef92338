//! Base URL resolution for shortened links.

use axum::http::{HeaderMap, header};

/// Used when neither a configured base URL nor a request origin is available.
pub const FALLBACK_BASE_URL: &str = "http://localhost:3000";

/// Reads the `Origin` header, if present and valid UTF-8.
pub fn origin_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
}

/// Picks the base URL for a shortened link.
///
/// Priority:
/// 1. `configured` (the `BASE_URL` setting)
/// 2. `origin` (the request's `Origin` header)
/// 3. [`FALLBACK_BASE_URL`]
///
/// Empty values are skipped. A trailing `/` is removed so that joining with
/// an alias never produces `//`.
pub fn resolve_base_url(configured: Option<&str>, origin: Option<&str>) -> String {
    let base = [configured, origin]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(FALLBACK_BASE_URL);

    base.trim_end_matches('/').to_string()
}

/// Joins a base URL and an alias into the full shortened link.
pub fn shortened_url(base_url: &str, alias: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), alias)
}
