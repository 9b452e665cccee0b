//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// PostgreSQL link store.
///
/// Records live in the `short_links` table created by the migrations in
/// `migrations/`. `code` is the primary key; a hash index on `long_url`
/// serves reverse lookups.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Total number of stored records.
    pub async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn get(&self, code: &str) -> Result<Option<String>, AppError> {
        let long_url =
            sqlx::query_scalar::<_, String>("SELECT long_url FROM short_links WHERE code = $1")
                .bind(code)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(long_url)
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM short_links WHERE code = $1)",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn find_code_by_url(&self, long_url: &str) -> Result<Option<String>, AppError> {
        // Several codes exist for one URL only after a lost dedup race;
        // ordering keeps the answer stable.
        let code = sqlx::query_scalar::<_, String>(
            r#"
            SELECT code
            FROM short_links
            WHERE long_url = $1
            ORDER BY code
            LIMIT 1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(code)
    }

    async fn insert_if_absent(&self, code: &str, long_url: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO short_links (code, long_url)
            VALUES ($1, $2)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .bind(code)
        .bind(long_url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .inspect_err(|e| tracing::warn!("Store health check failed: {}", e))
            .is_ok()
    }
}
