//! Repository trait for alias mapping storage.

use crate::domain::entities::Mapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable key-value storage for [`Mapping`] records, addressed by alias.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds a mapping by exact alias match.
    ///
    /// No case normalization or trimming is applied to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find(&self, alias: &str) -> Result<Option<Mapping>, AppError>;

    /// Returns whether a mapping for `alias` exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn exists(&self, alias: &str) -> Result<bool, AppError>;

    /// Persists a new mapping and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already stored; the
    /// existing record is left untouched.
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn insert(&self, mapping: Mapping) -> Result<Mapping, AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
