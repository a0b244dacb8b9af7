//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{MappingRepository, validate_code, validate_new_mapping};
use crate::error::AppError;

/// PostgreSQL repository backed by the `urls` table.
///
/// Insert-if-absent relies on `ON CONFLICT (code) DO NOTHING` and click
/// counting on a single-row `UPDATE`, so concurrent requests need no
/// application-level locking.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn create(&self, new_mapping: NewMapping) -> Result<bool, AppError> {
        validate_new_mapping(&new_mapping)?;

        let result = sqlx::query(
            r#"
            INSERT INTO urls (code, original_url)
            VALUES ($1, $2)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .bind(&new_mapping.code)
        .bind(&new_mapping.original_url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_url(&self, code: &str) -> Result<Option<String>, AppError> {
        validate_code(code)?;

        let url = sqlx::query_scalar::<_, String>("SELECT original_url FROM urls WHERE code = $1")
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(url)
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        validate_code(code)?;

        let result = sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_clicks(&self, code: &str) -> Result<Option<i64>, AppError> {
        validate_code(code)?;

        let clicks = sqlx::query_scalar::<_, i64>("SELECT clicks FROM urls WHERE code = $1")
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(clicks)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        validate_code(code)?;

        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT code, original_url, clicks, created_at
            FROM urls
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(total)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
