#![allow(dead_code)]

use seqlink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), "https://s.test.com".to_string())
}

pub async fn create_test_url(pool: &PgPool, short_id: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_id, original_url) VALUES ($1, $2)")
        .bind(short_id)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

/// Current value of the allocation counter, or `None` if no allocation has
/// happened yet (the row is created lazily by the first increment).
pub async fn current_seq(pool: &PgPool) -> Option<i64> {
    sqlx::query_scalar("SELECT seq FROM sequence_counters WHERE id = 'url_count'")
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
