//! Permutation validation for sort orders

use crate::SpsparseError;

/// Validate that `dims` is a bijection over `0..RANK`
///
/// Reports the first dimension that is out of range or repeated.
pub fn validate_permutation<const RANK: usize>(dims: &[usize; RANK]) -> Result<(), SpsparseError> {
    let mut seen = [false; RANK];
    for &dim in dims {
        if dim >= RANK || seen[dim] {
            return Err(SpsparseError::InvalidPermutation { rank: RANK, dim });
        }
        seen[dim] = true;
    }
    Ok(())
}
