//! Structured error types for gridview.
//!
//! The taxonomy is deliberately narrow: the only failure a caller can see is
//! an out-of-range index on a size or offset query. Every user-input edge
//! case (resize past the minimum, edit on invalid coordinates, hit test past
//! the last cell) is a silent clamp or no-op, never an error.

use crate::types::Axis;

/// All errors that can occur in gridview.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A size or cumulative-offset query referenced an index outside the
    /// track's valid range.
    #[error("index {index} out of range for {axis:?} track of length {len}")]
    IndexOutOfRange {
        /// Which axis the track belongs to.
        axis: Axis,
        /// The offending index.
        index: u32,
        /// Length of the track at the time of the query.
        len: u32,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
