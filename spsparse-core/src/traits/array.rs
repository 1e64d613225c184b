//! Core array abstraction traits
//!
//! Generic code that needs the rank, index type and value type of an
//! array names them through this trait instead of repeating the
//! parameters of every concrete container.

use super::element::SparseValue;
use super::index::SparseIndex;

/// Format-agnostic view of a rank-`RANK` array
///
/// ```
/// use spsparse_core::SparseArray;
///
/// fn describe<A: SparseArray<2>>(a: &A) -> (usize, [usize; 2]) {
///     (a.nnz(), a.shape())
/// }
/// ```
pub trait SparseArray<const RANK: usize> {
    /// The index type of each coordinate
    type Index: SparseIndex;

    /// The value type stored at each coordinate
    type Value: SparseValue;

    /// Number of dimensions
    fn rank(&self) -> usize {
        RANK
    }

    /// Extent of each dimension
    fn shape(&self) -> [usize; RANK];

    /// Number of stored entries
    fn nnz(&self) -> usize;
}

/// Check that two arrays agree on every dimension
pub fn check_same_shape<const RANK: usize>(
    left: [usize; RANK],
    right: [usize; RANK],
) -> crate::Result<()> {
    for (dim, (&l, &r)) in left.iter().zip(right.iter()).enumerate() {
        if l != r {
            return Err(crate::SpsparseError::ShapeMismatch {
                dim,
                left: l,
                right: r,
            });
        }
    }
    Ok(())
}
