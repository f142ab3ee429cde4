//! URL shortening and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{SequenceRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::base62;
use crate::utils::url_canon::canonicalize_url;
use serde_json::json;

/// Service for creating and resolving shortened URLs.
///
/// Short ids are minted by drawing the next value from the sequence
/// allocator and encoding it as base62, so two distinct URLs can never
/// receive the same id. Shortening is idempotent on the canonical URL.
pub struct ShortenerService<U: UrlRepository, S: SequenceRepository> {
    url_repository: Arc<U>,
    sequence_repository: Arc<S>,
}

impl<U: UrlRepository, S: SequenceRepository> ShortenerService<U, S> {
    /// Creates a new shortener service.
    pub fn new(url_repository: Arc<U>, sequence_repository: Arc<S>) -> Self {
        Self {
            url_repository,
            sequence_repository,
        }
    }

    /// Shortens a URL, returning the stored record.
    ///
    /// # Flow
    ///
    /// 1. Canonicalize the raw URL (default/upgrade the scheme to `https://`)
    /// 2. Return the existing record when the canonical URL is already stored
    /// 3. Otherwise draw the next sequence value, encode it as base62, and
    ///    persist the new record
    ///
    /// # Concurrency
    ///
    /// Two concurrent requests for the same new URL can both miss the
    /// existence check. The unique constraint on `original_url` makes the
    /// slower writer fail with a conflict, which is resolved here by
    /// re-running the lookup and returning the winner's record. The losing
    /// request burns one sequence value; gaps are tolerated, duplicates are
    /// not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for input that is not a well-formed
    /// absolute http(s) URL. Validation failures perform no allocation and
    /// no write.
    ///
    /// Returns [`AppError::Allocator`] when the sequence increment fails;
    /// retrying the whole call is safe because a failed allocation never
    /// consumes a value.
    pub async fn shorten(&self, raw_url: &str) -> Result<UrlRecord, AppError> {
        let original_url = canonicalize_url(raw_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self
            .url_repository
            .find_by_original_url(&original_url)
            .await?
        {
            return Ok(existing);
        }

        let seq = self.sequence_repository.next_value().await?;
        let short_id = base62::encode(seq).map_err(|e| {
            AppError::internal(
                "Short id encoding failed",
                json!({ "seq": seq, "reason": e.to_string() }),
            )
        })?;

        let new_record = NewUrlRecord {
            short_id,
            original_url: original_url.clone(),
        };

        match self.url_repository.create(new_record).await {
            Ok(record) => Ok(record),
            // Lost the race against a concurrent identical request; the
            // winner's record is now visible.
            Err(AppError::Conflict { .. }) => self
                .url_repository
                .find_by_original_url(&original_url)
                .await?
                .ok_or_else(|| {
                    AppError::internal(
                        "Conflicting record disappeared during shorten",
                        json!({ "original_url": original_url }),
                    )
                }),
            Err(e) => Err(e),
        }
    }

    /// Resolves a short id to its stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the short id.
    pub async fn resolve(&self, short_id: &str) -> Result<UrlRecord, AppError> {
        self.url_repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "short_id": short_id })))
    }

    /// Constructs the full short URL from the public base URL and a short id.
    pub fn short_url(&self, base_url: &str, short_id: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), short_id)
    }
}
