//! Error types surfaced by the index's public API.
//!
//! Everything the Builder and the traversal helpers assert about their own
//! internal state (split-edge prefixes, suffix-link invariants, canonize
//! preconditions) is checked with `debug_assert!`/`expect` instead: a
//! violation there is a bug in this crate, not a caller mistake, and is not
//! part of this enum.

use thiserror::Error;

/// Errors the index can report back to a caller.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GstError {
    /// `insert` was called with an id smaller than the last id it accepted.
    /// Ids must be passed in non-decreasing order (repeats are fine).
    #[error("insert id {id} is smaller than the last inserted id {last}")]
    OrderingError {
        /// The id that was rejected.
        id: u32,
        /// The highest id accepted so far.
        last: u32,
    },

    /// An operation that reads `aggregatedIds` (`search` on a hit, or
    /// `similar`) was called while the tree's aggregation is stale, i.e.
    /// `aggregate()` has not been called since the last `insert`.
    #[error("aggregate() must be called after the last insert before this operation")]
    NotAggregatedError,

    /// `similar` was called with a ratio outside the open interval (0, 1),
    /// the only range the similarity formula is well-defined over.
    #[error("similarity ratio {ratio} is outside the valid range (0, 1)")]
    InvalidRatio {
        /// The rejected ratio.
        ratio: f64,
    },
}

/// A specialized `Result` for index operations.
pub type Result<T> = std::result::Result<T, GstError>;
