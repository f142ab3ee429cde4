mod common;

use seqlink::AppError;
use seqlink::domain::entities::NewUrlRecord;
use seqlink::domain::repositories::UrlRepository;
use seqlink::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_record(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let new_record = NewUrlRecord {
        short_id: "1".to_string(),
        original_url: "https://example.com".to_string(),
    };

    let record = repo.create(new_record).await.unwrap();

    assert_eq!(record.short_id, "1");
    assert_eq!(record.original_url, "https://example.com");
    assert_eq!(record.clicks, 0);
}

#[sqlx::test]
async fn test_create_duplicate_original_url_conflicts(pool: PgPool) {
    common::create_test_url(&pool, "1", "https://example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo
        .create(NewUrlRecord {
            short_id: "2".to_string(),
            original_url: "https://example.com".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_create_duplicate_short_id_conflicts(pool: PgPool) {
    common::create_test_url(&pool, "1", "https://example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo
        .create(NewUrlRecord {
            short_id: "1".to_string(),
            original_url: "https://other.com".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_find_by_short_id(pool: PgPool) {
    common::create_test_url(&pool, "abc", "https://example.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo.find_by_short_id("abc").await.unwrap();

    assert!(record.is_some());
    assert_eq!(record.unwrap().original_url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_short_id_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo.find_by_short_id("missing").await.unwrap();

    assert!(record.is_none());
}

#[sqlx::test]
async fn test_find_by_original_url(pool: PgPool) {
    common::create_test_url(&pool, "xyz", "https://unique-url.com").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo.find_by_original_url("https://unique-url.com").await.unwrap();

    assert!(record.is_some());
    assert_eq!(record.unwrap().short_id, "xyz");
}

#[sqlx::test]
async fn test_find_by_original_url_is_exact_match(pool: PgPool) {
    common::create_test_url(&pool, "xyz", "https://example.com/page").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo
        .find_by_original_url("https://example.com/page/")
        .await
        .unwrap();

    assert!(record.is_none());
}
