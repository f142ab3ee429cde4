//! URL canonicalization.
//!
//! Canonicalizes the scheme of a submitted URL before it is used as the
//! deduplication key: schemeless input defaults to `https://`, and `http://`
//! is upgraded to `https://`. The canonical string is then validated as an
//! absolute URL. Everything past the scheme (host case, path, query) is
//! preserved exactly as submitted, since it is part of the uniqueness key.

use url::Url;

/// Errors that can occur during URL canonicalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlCanonError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs can be shortened")]
    UnsupportedScheme,
}

/// Canonicalizes a raw URL to its `https://` form.
///
/// # Rules
///
/// 1. `http://` prefixes are rewritten to `https://`
/// 2. Input without an explicit scheme is prefixed with `https://`
/// 3. Any other explicit scheme (`ftp://`, `file://`, ...) is rejected
/// 4. The result must parse as an absolute URL with a host
///
/// Scheme matching is ASCII case-insensitive.
///
/// # Errors
///
/// Returns [`UrlCanonError::UnsupportedScheme`] for non-HTTP(S) schemes and
/// [`UrlCanonError::InvalidFormat`] for input that does not form a valid
/// absolute URL.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(canonicalize_url("example.com").unwrap(), "https://example.com");
/// assert_eq!(canonicalize_url("http://example.com").unwrap(), "https://example.com");
/// assert!(canonicalize_url("ftp://example.com").is_err());
/// ```
pub fn canonicalize_url(raw: &str) -> Result<String, UrlCanonError> {
    let candidate = if let Some(rest) = strip_scheme_ci(raw, "http://") {
        format!("https://{rest}")
    } else if let Some(rest) = strip_scheme_ci(raw, "https://") {
        format!("https://{rest}")
    } else if raw.contains("://") {
        return Err(UrlCanonError::UnsupportedScheme);
    } else {
        format!("https://{raw}")
    };

    // Validate only. The canonical string is returned as submitted rather
    // than re-serialized, so the dedup key is stable for the caller.
    Url::parse(&candidate).map_err(|e| UrlCanonError::InvalidFormat(e.to_string()))?;

    Ok(candidate)
}

fn strip_scheme_ci<'a>(raw: &'a str, scheme: &str) -> Option<&'a str> {
    raw.get(..scheme.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
        .map(|_| &raw[scheme.len()..])
}
