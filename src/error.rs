//! Crate error type.
//!
//! The matcher has no I/O and no "not found" errors: membership misses are
//! reported as `false` and deleting an absent word is a no-op. The only
//! fallible points are the two invalid-configuration cases below.

/// Errors raised by invalid matcher configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A shingle length of zero was requested.
    #[error("shingle length must be at least 1, got {0}")]
    InvalidShingleLength(usize),

    /// An [`crate::top_n::NHighest`] was constructed with capacity zero.
    #[error("top-n capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}
