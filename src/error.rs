use thiserror::Error;

use crate::tree::SplayTree;

/// Addressing errors raised when a rank or range violates a precondition.
///
/// Nothing is ever clamped: an out-of-range address is reported to the caller
/// and the structure is left as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RopeError {
    #[error("rank {rank} out of bounds for sequence of length {len}")]
    RankOutOfBounds { rank: usize, len: usize },

    #[error("invalid cut range [{start}, {end}] for sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("paste offset {offset} out of bounds for remainder of length {len}")]
    PasteOutOfBounds { offset: usize, len: usize },
}

/// A rejected split. The tree is handed back untouched.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct SplitError {
    pub tree: SplayTree,
    pub error: RopeError,
}

impl From<SplitError> for RopeError {
    fn from(split: SplitError) -> Self {
        split.error
    }
}
