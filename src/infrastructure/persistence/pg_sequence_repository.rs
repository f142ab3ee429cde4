//! PostgreSQL implementation of the sequence allocator.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::SequenceRepository;
use crate::error::AppError;

/// Identifier of the singleton counter row backing short id allocation.
const COUNTER_ID: &str = "url_count";

/// PostgreSQL-backed sequence allocator.
///
/// The increment runs as a single upsert statement, so creation of the
/// counter row and the increment itself are one atomic operation. Reading
/// the current value first and writing it back from application code would
/// reintroduce the lost-update race this construct exists to prevent.
pub struct PgSequenceRepository {
    pool: Arc<PgPool>,
}

impl PgSequenceRepository {
    /// Creates a new allocator with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceRepository for PgSequenceRepository {
    async fn next_value(&self) -> Result<i64, AppError> {
        let seq: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO sequence_counters (id, seq)
            VALUES ($1, 1)
            ON CONFLICT (id) DO UPDATE
            SET seq = sequence_counters.seq + 1
            RETURNING seq
            "#,
        )
        .bind(COUNTER_ID)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Sequence increment failed: {e}");
            AppError::allocator(
                "Failed to allocate next sequence value",
                json!({ "counter": COUNTER_ID }),
            )
        })?;

        Ok(seq)
    }
}
