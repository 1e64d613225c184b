//! Merging coordinate arrays into destination containers

use spsparse_core::{
    check_same_shape, validate_index, DuplicatePolicy, SparseArray, SparseIndex, SparseValue,
    SpsparseError,
};
use tracing::debug;

use crate::coo::CooArray;
use crate::handler::raise;
use crate::Result;

/// A container that coordinate entries can be merged into
pub trait MergeTarget<I: SparseIndex, V: SparseValue, const RANK: usize> {
    /// Whether every coordinate of the shape has storage
    ///
    /// Only dense targets accept `DuplicatePolicy::ReplaceThenAdd`.
    fn is_dense(&self) -> bool;

    /// Extent of each dimension
    fn target_shape(&self) -> [usize; RANK];

    /// Current value at `index`, `None` if nothing is stored there
    fn get(&self, index: &[I; RANK]) -> spsparse_core::Result<Option<V>>;

    /// Store `value` at `index`
    fn set(&mut self, index: &[I; RANK], value: V) -> spsparse_core::Result<()>;
}

/// Merge every entry of `array` into `dest`, in storage order
///
/// Each entry is combined with whatever `dest` already holds at its
/// coordinates:
///
/// - `Add`: existing + incoming, absent counts as zero;
/// - `Replace`: incoming;
/// - `LeaveAlone`: existing, unless absent or none;
/// - `ReplaceThenAdd`: incoming if existing is none, else existing + incoming.
///
/// Shape mismatches, out-of-bounds tuples and `ReplaceThenAdd` into a
/// non-dense destination are rejected through the error handler before
/// `dest` is touched. An integer sum that overflows stops the merge with
/// `SpsparseError::ValueOverflow`; entries before it stay merged.
pub fn merge_into<I, V, T, const RANK: usize>(
    array: &CooArray<I, V, RANK>,
    dest: &mut T,
    policy: DuplicatePolicy,
    zero_nan: bool,
) -> Result<()>
where
    I: SparseIndex,
    V: SparseValue,
    T: MergeTarget<I, V, RANK>,
{
    if policy.requires_dense() && !dest.is_dense() {
        return Err(raise(SpsparseError::ReplaceThenAddOnSparse));
    }
    let shape = dest.target_shape();
    check_same_shape(array.shape(), shape).map_err(raise)?;
    // Arrays built without checks may hold tuples outside the shape
    for index in array.indices() {
        validate_index(index, &shape).map_err(raise)?;
    }

    for (index, &value) in array.indices().iter().zip(array.values()) {
        let merged = match dest.get(index).map_err(raise)? {
            None => value,
            Some(existing) => match policy {
                DuplicatePolicy::LeaveAlone if existing.is_none(zero_nan) => value,
                _ => policy.combine(existing, value, zero_nan).map_err(raise)?,
            },
        };
        dest.set(index, merged).map_err(raise)?;
    }

    debug!(
        nnz = array.len(),
        %policy,
        dense = dest.is_dense(),
        "merged coordinate array into destination"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseArray;
    use crate::map::SparseMap;

    fn source() -> CooArray<i32, f64, 2> {
        CooArray::from_entries([2, 2], [([0, 0], 3.0), ([1, 1], 4.0), ([0, 0], 5.0)]).unwrap()
    }

    #[test]
    fn test_dense_add() {
        let mut dest = DenseArray::<f64, 2>::from_vec([2, 2], vec![1.0, 0.0, 0.0, 0.0]).unwrap();
        merge_into(&source(), &mut dest, DuplicatePolicy::Add, false).unwrap();
        assert_eq!(dest.as_slice(), &[9.0, 0.0, 0.0, 4.0]);
    }

    #[test]
    fn test_dense_leave_alone_and_replace() {
        let mut dest = DenseArray::<f64, 2>::new([2, 2]).unwrap();
        merge_into(&source(), &mut dest, DuplicatePolicy::LeaveAlone, false).unwrap();
        assert_eq!(dest.as_slice(), &[3.0, 0.0, 0.0, 4.0]);

        let mut dest = DenseArray::<f64, 2>::new([2, 2]).unwrap();
        merge_into(&source(), &mut dest, DuplicatePolicy::Replace, false).unwrap();
        assert_eq!(dest.as_slice(), &[5.0, 0.0, 0.0, 4.0]);
    }

    #[test]
    fn test_dense_replace_then_add() {
        // NaN-filled destination: first write replaces, later ones add
        let mut dest = DenseArray::<f64, 2>::filled([2, 2], f64::NAN).unwrap();
        merge_into(&source(), &mut dest, DuplicatePolicy::ReplaceThenAdd, true).unwrap();
        assert_eq!(dest.get([0, 0]), Some(8.0));
        assert_eq!(dest.get([1, 1]), Some(4.0));
        assert!(dest.get([0, 1]).unwrap().is_nan());

        // Without zero_nan the NaN is a real value and absorbs the sum
        let mut dest = DenseArray::<f64, 2>::filled([2, 2], f64::NAN).unwrap();
        merge_into(&source(), &mut dest, DuplicatePolicy::ReplaceThenAdd, false).unwrap();
        assert!(dest.get([0, 0]).unwrap().is_nan());
    }

    #[test]
    fn test_sparse_replace_then_add_rejected() {
        let mut dest = SparseMap::<i32, f64, 2>::new([2, 2]).unwrap();
        let err =
            merge_into(&source(), &mut dest, DuplicatePolicy::ReplaceThenAdd, false).unwrap_err();
        assert_eq!(err.retcode(), SpsparseError::ReplaceThenAddOnSparse.code());
        assert!(dest.is_empty());
    }

    #[test]
    fn test_sparse_map_policies() {
        let mut dest = SparseMap::<i32, f64, 2>::new([2, 2]).unwrap();
        merge_into(&source(), &mut dest, DuplicatePolicy::Add, false).unwrap();
        assert_eq!(dest.get(&[0, 0]), Some(8.0));
        assert_eq!(dest.get(&[1, 1]), Some(4.0));
        assert_eq!(dest.len(), 2);

        let mut dest = SparseMap::<i32, f64, 2>::new([2, 2]).unwrap();
        merge_into(&source(), &mut dest, DuplicatePolicy::LeaveAlone, false).unwrap();
        assert_eq!(dest.get(&[0, 0]), Some(3.0));
    }

    #[test]
    fn test_out_of_bounds_leaves_dest_untouched() {
        let unchecked = CooArray::<i32, f64, 2>::from_parts(
            [2, 2],
            vec![[0, 0], [1, 1], [1, 2]],
            vec![1.0, 2.0, 3.0],
            false,
        )
        .unwrap();

        let mut dense = DenseArray::<f64, 2>::new([2, 2]).unwrap();
        let err = merge_into(&unchecked, &mut dense, DuplicatePolicy::Add, false).unwrap_err();
        assert_eq!(
            err.retcode(),
            SpsparseError::IndexOutOfBounds {
                dim: 1,
                index: 2,
                extent: 2
            }
            .code()
        );
        assert_eq!(dense.as_slice(), &[0.0; 4]);

        let mut map = SparseMap::<i32, f64, 2>::new([2, 2]).unwrap();
        assert!(merge_into(&unchecked, &mut map, DuplicatePolicy::Replace, false).is_err());
        assert!(map.is_empty());
    }

    #[test]
    fn test_integer_overflow() {
        let src = CooArray::<u32, i64, 1>::from_entries([2], [([0], 1), ([1], 1)]).unwrap();
        let mut dest = DenseArray::<i64, 1>::from_vec([2], vec![0, i64::MAX]).unwrap();
        let err = merge_into(&src, &mut dest, DuplicatePolicy::Add, false).unwrap_err();
        assert_eq!(err.retcode(), SpsparseError::ValueOverflow.code());
        assert_eq!(dest.get([1]), Some(i64::MAX));
    }

    #[test]
    fn test_shape_mismatch() {
        let mut dest = DenseArray::<f64, 2>::new([3, 2]).unwrap();
        let err = merge_into(&source(), &mut dest, DuplicatePolicy::Add, false).unwrap_err();
        assert_eq!(
            err.retcode(),
            SpsparseError::ShapeMismatch {
                dim: 0,
                left: 2,
                right: 3
            }
            .code()
        );
    }
}
