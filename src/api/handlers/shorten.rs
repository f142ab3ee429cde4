//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com/some/page",
///   "shortId": "g8",
///   "shortUrl": "https://s.example.com/g8"
/// }
/// ```
///
/// Submitting a URL that was already shortened returns the existing mapping
/// with a 200, identical to a fresh creation.
///
/// # Errors
///
/// Returns 400 Bad Request if the body fails validation or the URL is not a
/// well-formed http(s) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state.shortener.shorten(&payload.original_url).await?;
    let short_url = state.shortener.short_url(&state.base_url, &record.short_id);

    Ok(Json(ShortenResponse {
        original_url: record.original_url,
        short_id: record.short_id,
        short_url,
    }))
}
