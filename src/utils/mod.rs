//! Utility functions for short id encoding and URL processing.
//!
//! - [`base62`] - Integer ↔ base62 string codec
//! - [`url_canon`] - URL scheme canonicalization and validation

pub mod base62;
pub mod url_canon;
