//! Dense destination arrays
//!
//! A `DenseArray` stores every element of its shape in row-major order.
//! It is the only kind of destination that accepts
//! `DuplicatePolicy::ReplaceThenAdd`.

use spsparse_core::{
    dense_len, validate_index, validate_lengths, IndexTuple, SparseArray, SparseIndex,
    SparseValue,
};

use crate::handler::raise;
use crate::merge::MergeTarget;
use crate::Result;

/// Row-major dense array of rank `RANK`
#[derive(Debug, Clone, PartialEq)]
pub struct DenseArray<V, const RANK: usize> {
    shape: [usize; RANK],
    strides: [usize; RANK],
    data: Vec<V>,
}

fn row_major_strides<const RANK: usize>(shape: &[usize; RANK]) -> [usize; RANK] {
    let mut strides = [1usize; RANK];
    for d in (0..RANK.saturating_sub(1)).rev() {
        strides[d] = strides[d + 1].saturating_mul(shape[d + 1]);
    }
    strides
}

impl<V: SparseValue, const RANK: usize> DenseArray<V, RANK> {
    /// Create an array of zeros
    pub fn new(shape: [usize; RANK]) -> Result<Self> {
        Self::filled(shape, V::zero())
    }

    /// Create an array with every element set to `value`
    pub fn filled(shape: [usize; RANK], value: V) -> Result<Self> {
        let len = dense_len(&shape).map_err(raise)?;
        Ok(Self {
            shape,
            strides: row_major_strides(&shape),
            data: vec![value; len],
        })
    }

    /// Wrap row-major data of the right length
    pub fn from_vec(shape: [usize; RANK], data: Vec<V>) -> Result<Self> {
        let len = dense_len(&shape).map_err(raise)?;
        validate_lengths(len, data.len()).map_err(raise)?;
        Ok(Self {
            shape,
            strides: row_major_strides(&shape),
            data,
        })
    }

    /// Storage offset of an in-bounds position
    #[inline]
    fn offset(&self, pos: &[usize; RANK]) -> usize {
        pos.iter().zip(&self.strides).map(|(p, s)| p * s).sum()
    }

    /// Element at `pos`, or `None` if out of bounds
    pub fn get(&self, pos: [usize; RANK]) -> Option<V> {
        if pos.iter().zip(&self.shape).any(|(p, e)| p >= e) {
            return None;
        }
        Some(self.data[self.offset(&pos)])
    }

    /// Set the element at `pos`
    pub fn set(&mut self, pos: [usize; RANK], value: V) -> Result<()> {
        let pos = validate_index(&pos, &self.shape).map_err(raise)?;
        let offset = self.offset(&pos);
        self.data[offset] = value;
        Ok(())
    }

    /// Extent of each dimension
    pub fn shape(&self) -> [usize; RANK] {
        self.shape
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [V] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<V> {
        self.data
    }
}

impl<V: SparseValue, const RANK: usize> SparseArray<RANK> for DenseArray<V, RANK> {
    type Index = usize;
    type Value = V;

    fn shape(&self) -> [usize; RANK] {
        self.shape
    }

    /// Number of elements that are not exactly zero
    fn nnz(&self) -> usize {
        self.data.iter().filter(|v| !v.is_none(false)).count()
    }
}

impl<I: SparseIndex, V: SparseValue, const RANK: usize> MergeTarget<I, V, RANK>
    for DenseArray<V, RANK>
{
    fn is_dense(&self) -> bool {
        true
    }

    fn target_shape(&self) -> [usize; RANK] {
        self.shape
    }

    fn get(&self, index: &[I; RANK]) -> spsparse_core::Result<Option<V>> {
        let pos = validate_index(index, &self.shape)?;
        Ok(Some(self.data[self.offset(&pos)]))
    }

    fn set(&mut self, index: &[I; RANK], value: V) -> spsparse_core::Result<()> {
        let pos = validate_index(index, &self.shape)?;
        let offset = self.offset(&pos);
        self.data[offset] = value;
        Ok(())
    }
}

impl<V: SparseValue, const RANK: usize> core::fmt::Display for DenseArray<V, RANK> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "DenseArray {} {:?}", IndexTuple(&self.shape), self.data)
    }
}
