//! Error types for SpSparse operations

use thiserror::Error;

/// Usage errors detected by SpSparse operations
///
/// Every variant is a caller mistake; none are retried or downgraded.
/// The `spsparse` crate routes these through the process-wide error
/// handler before they reach the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpsparseError {
    /// Sort order is not a bijection over `0..rank`
    #[error("invalid sort permutation for rank {rank}: dimension {dim} is missing or repeated")]
    InvalidPermutation { rank: usize, dim: usize },
    /// Index lies outside the declared extent of its dimension
    #[error("index {index} out of bounds for dimension {dim} with extent {extent}")]
    IndexOutOfBounds {
        dim: usize,
        index: usize,
        extent: usize,
    },
    /// Signed index is negative
    #[error("negative index in dimension {dim}")]
    NegativeIndex { dim: usize },
    /// Index does not fit in the target index type
    #[error("index {index} does not fit in the index type")]
    IndexOverflow { index: usize },
    /// Two operands disagree on the extent of a dimension
    #[error("shape mismatch in dimension {dim}: {left} vs {right}")]
    ShapeMismatch {
        dim: usize,
        left: usize,
        right: usize,
    },
    /// Parallel buffers have different lengths
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// Total element count of a dense shape overflows `usize`
    #[error("dense shape is too large")]
    ShapeOverflow,
    /// `ReplaceThenAdd` requested against a sparse destination
    #[error("DuplicatePolicy::ReplaceThenAdd is only valid for dense destinations")]
    ReplaceThenAddOnSparse,
    /// Summing two values overflowed the value type
    #[error("value overflow while adding entries")]
    ValueOverflow,
}

impl SpsparseError {
    /// Return code handed to the error handler alongside the message
    pub const fn code(&self) -> i32 {
        match self {
            SpsparseError::InvalidPermutation { .. } => 1,
            SpsparseError::IndexOutOfBounds { .. } => 2,
            SpsparseError::NegativeIndex { .. } => 3,
            SpsparseError::IndexOverflow { .. } => 4,
            SpsparseError::ShapeMismatch { .. } => 5,
            SpsparseError::LengthMismatch { .. } => 6,
            SpsparseError::ShapeOverflow => 7,
            SpsparseError::ReplaceThenAddOnSparse => 8,
            SpsparseError::ValueOverflow => 9,
        }
    }
}

/// Result type for core validation
pub type Result<T> = core::result::Result<T, SpsparseError>;
