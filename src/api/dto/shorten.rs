//! DTOs for the URL shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten. Scheme is optional; schemeless input is
    /// treated as `https://`.
    #[validate(length(min = 1, max = 2048, message = "originalUrl must be 1-2048 characters"))]
    pub original_url: String,
}

/// Response returned for a shortened URL.
///
/// Identical for freshly created and already-existing records, so clients
/// cannot tell (and need not care) whether the call was the first one.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_id: String,
    pub short_url: String,
}
