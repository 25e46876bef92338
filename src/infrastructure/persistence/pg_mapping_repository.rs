//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Row shape of the `urls` table.
#[derive(sqlx::FromRow)]
struct MappingRow {
    alias: String,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping::new(row.alias, row.original_url, row.created_at)
    }
}

/// PostgreSQL repository for alias mappings.
///
/// All statements use bound parameters. `insert` relies on the primary key
/// of `urls.alias`, so two racing inserts of one alias cannot both succeed.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository over an already connected pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find(&self, alias: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT alias, original_url, created_at
            FROM urls
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn exists(&self, alias: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE alias = $1)")
                .bind(alias)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn insert(&self, mapping: Mapping) -> Result<Mapping, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO urls (alias, original_url, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (alias) DO NOTHING
            RETURNING alias, original_url, created_at
            "#,
        )
        .bind(&mapping.alias)
        .bind(&mapping.original_url)
        .bind(mapping.created_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        // No row back means another writer stored this alias first.
        row.map(Mapping::from)
            .ok_or_else(|| AppError::conflict(mapping.alias))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
