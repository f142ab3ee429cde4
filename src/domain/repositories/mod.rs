//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in `crate::infrastructure::persistence`.
//! Mock implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - URL record storage and lookups
//! - [`SequenceRepository`] - Durable short id sequence allocation

pub mod sequence_repository;
pub mod url_repository;

pub use sequence_repository::SequenceRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use sequence_repository::MockSequenceRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
