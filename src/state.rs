//! Shared application state injected into HTTP handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::{PgSequenceRepository, PgUrlRepository};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub shortener: Arc<ShortenerService<PgUrlRepository, PgSequenceRepository>>,
    /// Public base URL prepended to short ids when building short URLs.
    pub base_url: String,
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    pub fn new(pool: Arc<PgPool>, base_url: String) -> Self {
        let url_repository = Arc::new(PgUrlRepository::new(pool.clone()));
        let sequence_repository = Arc::new(PgSequenceRepository::new(pool.clone()));

        let shortener = Arc::new(ShortenerService::new(url_repository, sequence_repository));

        Self {
            pool,
            shortener,
            base_url,
        }
    }
}
