//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL record storage and lookups
//! - [`PgSequenceRepository`] - Atomic sequence allocation

pub mod pg_sequence_repository;
pub mod pg_url_repository;

pub use pg_sequence_repository::PgSequenceRepository;
pub use pg_url_repository::PgUrlRepository;
