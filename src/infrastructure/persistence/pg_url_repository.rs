//! PostgreSQL implementation of the URL record repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Database row shape for the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    short_id: String,
    original_url: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord {
            id: row.id,
            short_id: row.short_id,
            original_url: row.original_url,
            clicks: row.clicks,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for URL record storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let row: UrlRow = sqlx::query_as(
            r#"
            INSERT INTO urls (short_id, original_url)
            VALUES ($1, $2)
            RETURNING id, short_id, original_url, clicks, created_at
            "#,
        )
        .bind(&new_record.short_id)
        .bind(&new_record.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            SELECT id, short_id, original_url, clicks, created_at
            FROM urls
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            SELECT id, short_id, original_url, clicks, created_at
            FROM urls
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
