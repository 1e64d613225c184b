//! Hash-map sparse destination
//!
//! A `SparseMap` keeps at most one value per coordinate and supports
//! random access. It is a sparse destination, so it rejects
//! `DuplicatePolicy::ReplaceThenAdd`.

use hashbrown::HashMap;
use spsparse_core::{
    validate_index, validate_shape_fits, SortOrder, SparseArray, SparseIndex, SparseValue,
};

use crate::coo::CooArray;
use crate::handler::raise;
use crate::merge::MergeTarget;
use crate::sort::{apply_permutation, sort_permutation};
use crate::Result;

/// Sparse array keyed by index tuple
#[derive(Debug, Clone)]
pub struct SparseMap<I, V, const RANK: usize> {
    shape: [usize; RANK],
    entries: HashMap<[I; RANK], V>,
}

impl<I: SparseIndex, V: SparseValue, const RANK: usize> SparseMap<I, V, RANK> {
    /// Create an empty map with the given shape
    pub fn new(shape: [usize; RANK]) -> Result<Self> {
        validate_shape_fits::<I, RANK>(&shape).map_err(raise)?;
        Ok(Self {
            shape,
            entries: HashMap::new(),
        })
    }

    /// Value stored at `index`
    pub fn get(&self, index: &[I; RANK]) -> Option<V> {
        self.entries.get(index).copied()
    }

    /// Store `value` at `index`, returning the previous value
    pub fn insert(&mut self, index: [I; RANK], value: V) -> Result<Option<V>> {
        validate_index(&index, &self.shape).map_err(raise)?;
        Ok(self.entries.insert(index, value))
    }

    /// Remove the value at `index`
    pub fn remove(&mut self, index: &[I; RANK]) -> Option<V> {
        self.entries.remove(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&[I; RANK], &V)> + '_ {
        self.entries.iter()
    }

    /// Convert into a coordinate array sorted by `order`
    ///
    /// Keys are unique, so the result is already consolidated.
    pub fn to_coo(&self, order: SortOrder<RANK>) -> CooArray<I, V, RANK> {
        let (indices, values): (Vec<[I; RANK]>, Vec<V>) =
            self.entries.iter().map(|(k, v)| (*k, *v)).unzip();
        let perm = sort_permutation(&indices, &order);
        CooArray::from_sorted_parts(
            self.shape,
            apply_permutation(&indices, &perm),
            apply_permutation(&values, &perm),
            order,
        )
    }
}

impl<I: SparseIndex, V: SparseValue, const RANK: usize> SparseArray<RANK>
    for SparseMap<I, V, RANK>
{
    type Index = I;
    type Value = V;

    fn shape(&self) -> [usize; RANK] {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl<I: SparseIndex, V: SparseValue, const RANK: usize> MergeTarget<I, V, RANK>
    for SparseMap<I, V, RANK>
{
    fn is_dense(&self) -> bool {
        false
    }

    fn target_shape(&self) -> [usize; RANK] {
        self.shape
    }

    fn get(&self, index: &[I; RANK]) -> spsparse_core::Result<Option<V>> {
        Ok(self.entries.get(index).copied())
    }

    fn set(&mut self, index: &[I; RANK], value: V) -> spsparse_core::Result<()> {
        validate_index(index, &self.shape)?;
        self.entries.insert(*index, value);
        Ok(())
    }
}
