//! Request-level error type and its HTTP mapping.
//!
//! Every failure a handler can produce is an [`AppError`]. Handlers return
//! `Result<_, AppError>` and the conversion to a JSON response happens once,
//! in the [`IntoResponse`] impl below.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Reasons a create request is rejected before touching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing fields")]
    MissingFields,
    #[error("invalid url scheme")]
    InvalidUrlScheme,
}

impl ValidationError {
    /// Message shown to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingFields => "URL and alias are required",
            Self::InvalidUrlScheme => "Invalid URL. Must start with http:// or https://",
        }
    }
}

/// Application error returned by services, repositories and handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("alias taken: {alias}")]
    Conflict { alias: String },

    #[error("alias not found: {alias}")]
    NotFound { alias: String },

    #[error("{0}")]
    Store(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn conflict(alias: impl Into<String>) -> Self {
        Self::Conflict {
            alias: alias.into(),
        }
    }

    pub fn not_found(alias: impl Into<String>) -> Self {
        Self::NotFound {
            alias: alias.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// HTTP status for this error.
    ///
    /// Conflicts are reported as `400` like the other client-side rejections.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `error` field of the response body.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(v) => v.public_message().to_string(),
            Self::Conflict { .. } => {
                "This alias is already taken. Please choose another one.".to_string()
            }
            Self::NotFound { .. } => "Page not found".to_string(),
            Self::Store(e) => format!("Something went wrong: {}", e),
            Self::Internal(detail) => format!("Something went wrong: {}", detail),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::internal(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Store(_) | Self::Internal(_) => tracing::error!("Request failed: {}", self),
            Self::NotFound { .. } => tracing::debug!("{}", self),
            Self::Validation(_) | Self::Conflict { .. } => tracing::info!("Rejected: {}", self),
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
