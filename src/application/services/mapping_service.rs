//! Alias mapping creation and resolution.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::entities::{Mapping, has_allowed_scheme};
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, ValidationError};
use crate::utils::base_url::{resolve_base_url, shortened_url};

/// Service implementing Create-Mapping and Resolve-Mapping.
///
/// Holds the injected store handle and the optional configured base URL.
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
    base_url: Option<String>,
}

impl MappingService {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<dyn MappingRepository>, base_url: Option<String>) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Validates input and stores a new mapping.
    ///
    /// Checks run in this order, and the first failure wins:
    /// 1. `url` and `alias` are non-empty
    /// 2. `url` starts with `http://` or `https://`
    /// 3. `alias` is not already stored
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for the first two checks and
    /// [`AppError::Conflict`] when the alias is taken. Nothing is written
    /// in either case.
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn create_mapping(&self, url: &str, alias: &str) -> Result<Mapping, AppError> {
        if url.is_empty() || alias.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }

        if !has_allowed_scheme(url) {
            return Err(ValidationError::InvalidUrlScheme.into());
        }

        if self.repository.exists(alias).await? {
            return Err(AppError::conflict(alias));
        }

        let mapping = Mapping::new(alias.to_string(), url.to_string(), Utc::now());
        let stored = self.repository.insert(mapping).await?;

        info!(alias = %stored.alias, "Created mapping");

        Ok(stored)
    }

    /// Looks up the original URL for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias was never stored.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn resolve_mapping(&self, alias: &str) -> Result<String, AppError> {
        let mapping = self
            .repository
            .find(alias)
            .await?
            .ok_or_else(|| AppError::not_found(alias))?;

        debug!(alias, "Resolved mapping");

        Ok(mapping.original_url)
    }

    /// Builds the full shortened link for `alias`.
    ///
    /// `origin` is the request's `Origin` header, used only when no base URL
    /// is configured.
    pub fn get_shortened_url(&self, alias: &str, origin: Option<&str>) -> String {
        let base = resolve_base_url(self.base_url.as_deref(), origin);
        shortened_url(&base, alias)
    }

    /// Checks store connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
