//! Repository trait for durable sequence allocation.

use crate::error::AppError;
use async_trait::async_trait;

/// Allocator of strictly increasing sequence values backing short ids.
///
/// This trait exclusively owns the counter's mutation path; no other
/// component writes to it. Implementations must perform the increment as one
/// indivisible operation against the durable store so that concurrent
/// callers can never observe the same value, across threads and across
/// processes alike.
///
/// A value returned once is never returned again, even if the caller fails
/// to use it afterwards. Gaps in the sequence are tolerated; duplicates are
/// not.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SequenceRepository: Send + Sync {
    /// Atomically increments the counter and returns the new value.
    ///
    /// The first call creates the counter and returns 1 (create-if-absent is
    /// part of the same atomic operation, never a separate existence check).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Allocator`] if the increment cannot be durably
    /// committed. No retry happens inside the allocator; retrying is the
    /// caller's choice and is always safe because a failed attempt is
    /// guaranteed not to have advanced the counter.
    async fn next_value(&self) -> Result<i64, AppError>;
}
