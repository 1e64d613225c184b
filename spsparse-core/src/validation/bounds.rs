//! Index bounds and shape validation
//!
//! Pure checks on index tuples and shapes with overflow protection.

use crate::{SparseIndex, SpsparseError};

/// Validate an index tuple against a shape
///
/// Returns the tuple converted to positions so callers can address
/// dense storage without converting again.
pub fn validate_index<I: SparseIndex, const RANK: usize>(
    index: &[I; RANK],
    shape: &[usize; RANK],
) -> Result<[usize; RANK], SpsparseError> {
    let mut pos = [0usize; RANK];
    for dim in 0..RANK {
        let i = index[dim];
        if i.is_negative() {
            return Err(SpsparseError::NegativeIndex { dim });
        }
        let Some(p) = i.to_usize() else {
            return Err(SpsparseError::IndexOutOfBounds {
                dim,
                index: usize::MAX,
                extent: shape[dim],
            });
        };
        if p >= shape[dim] {
            return Err(SpsparseError::IndexOutOfBounds {
                dim,
                index: p,
                extent: shape[dim],
            });
        }
        pos[dim] = p;
    }
    Ok(pos)
}

/// Validate that every extent of a shape is addressable by `I`
///
/// The largest index of each dimension is `extent - 1`, which must
/// convert into the index type.
pub fn validate_shape_fits<I: SparseIndex, const RANK: usize>(
    shape: &[usize; RANK],
) -> Result<(), SpsparseError> {
    for &extent in shape {
        if extent > 0 && I::from_usize(extent - 1).is_none() {
            return Err(SpsparseError::IndexOverflow { index: extent - 1 });
        }
    }
    Ok(())
}

/// Total element count of a dense shape
///
/// A rank-0 shape holds one element.
pub fn dense_len<const RANK: usize>(shape: &[usize; RANK]) -> Result<usize, SpsparseError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
        .ok_or(SpsparseError::ShapeOverflow)
}

/// Validate that two parallel buffers have the same length
pub const fn validate_lengths(expected: usize, actual: usize) -> Result<(), SpsparseError> {
    if expected != actual {
        return Err(SpsparseError::LengthMismatch { expected, actual });
    }
    Ok(())
}
