//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let record = state.shortener.resolve(&short_id).await?;

    debug!("Redirecting {} -> {}", short_id, record.original_url);

    Ok(Redirect::temporary(&record.original_url))
}
