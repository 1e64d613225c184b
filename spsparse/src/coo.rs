//! Coordinate-format (COO) sparse arrays of any rank
//!
//! Entries are kept in struct-of-arrays form: one index tuple and one
//! value per entry. Coordinates may repeat until the array is
//! consolidated.

use spsparse_core::{
    check_same_shape, validate_index, validate_lengths, validate_shape_fits, IndexTuple,
    SortOrder, SparseArray, SparseIndex, SparseValue,
};

use crate::handler::raise;
use crate::Result;

/// One coordinate record: an index tuple and its value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<I, V, const RANK: usize> {
    pub index: [I; RANK],
    pub value: V,
}

impl<I: core::fmt::Display, V: core::fmt::Debug, const RANK: usize> core::fmt::Display
    for Entry<I, V, RANK>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} = {:?}", IndexTuple(&self.index), self.value)
    }
}

/// N-dimensional sparse array in coordinate format
///
/// The array remembers the order it was last sorted by. Appending an
/// entry that would break that order forgets it.
#[derive(Debug, Clone, PartialEq)]
pub struct CooArray<I, V, const RANK: usize> {
    shape: [usize; RANK],
    indices: Vec<[I; RANK]>,
    values: Vec<V>,
    sort_order: Option<SortOrder<RANK>>,
}

impl<I: SparseIndex, V: SparseValue, const RANK: usize> CooArray<I, V, RANK> {
    /// Create an empty array with the given shape
    pub fn new(shape: [usize; RANK]) -> Result<Self> {
        Self::with_capacity(shape, 0)
    }

    /// Create an empty array with room for `capacity` entries
    pub fn with_capacity(shape: [usize; RANK], capacity: usize) -> Result<Self> {
        validate_shape_fits::<I, RANK>(&shape).map_err(raise)?;
        Ok(Self {
            shape,
            indices: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            sort_order: None,
        })
    }

    /// Build an array from parallel index and value buffers
    ///
    /// With `check`, every index is validated against `shape`.
    pub fn from_parts(
        shape: [usize; RANK],
        indices: Vec<[I; RANK]>,
        values: Vec<V>,
        check: bool,
    ) -> Result<Self> {
        validate_shape_fits::<I, RANK>(&shape).map_err(raise)?;
        validate_lengths(indices.len(), values.len()).map_err(raise)?;
        if check {
            for index in &indices {
                validate_index(index, &shape).map_err(raise)?;
            }
        }
        Ok(Self {
            shape,
            indices,
            values,
            sort_order: None,
        })
    }

    /// Build an array from `(index, value)` pairs, checking every index
    pub fn from_entries<T>(shape: [usize; RANK], entries: T) -> Result<Self>
    where
        T: IntoIterator<Item = ([I; RANK], V)>,
    {
        let entries = entries.into_iter();
        let mut array = Self::with_capacity(shape, entries.size_hint().0)?;
        for (index, value) in entries {
            array.add(index, value)?;
        }
        Ok(array)
    }

    /// Assemble an array whose entries are known to be sorted by `order`
    pub(crate) fn from_sorted_parts(
        shape: [usize; RANK],
        indices: Vec<[I; RANK]>,
        values: Vec<V>,
        order: SortOrder<RANK>,
    ) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        debug_assert!(order.is_sorted(&indices));
        Self {
            shape,
            indices,
            values,
            sort_order: Some(order),
        }
    }

    /// Append one entry
    pub fn add(&mut self, index: [I; RANK], value: V) -> Result<()> {
        validate_index(&index, &self.shape).map_err(raise)?;
        self.push_unchecked(index, value);
        Ok(())
    }

    fn push_unchecked(&mut self, index: [I; RANK], value: V) {
        if let (Some(order), Some(last)) = (self.sort_order, self.indices.last()) {
            if order.compare(last, &index) == core::cmp::Ordering::Greater {
                self.sort_order = None;
            }
        }
        self.indices.push(index);
        self.values.push(value);
    }

    /// Append every entry of `other`
    pub fn append(&mut self, other: &Self) -> Result<()> {
        check_same_shape(self.shape, other.shape).map_err(raise)?;
        self.reserve(other.len());
        for (index, &value) in other.indices.iter().zip(&other.values) {
            self.push_unchecked(*index, value);
        }
        Ok(())
    }

    /// Drop every entry whose value is none, keeping the order of the rest
    pub fn eliminate_none(&mut self, zero_nan: bool) {
        let mut keep = 0;
        for k in 0..self.values.len() {
            if !self.values[k].is_none(zero_nan) {
                self.indices[keep] = self.indices[k];
                self.values[keep] = self.values[k];
                keep += 1;
            }
        }
        self.indices.truncate(keep);
        self.values.truncate(keep);
    }

    /// Reserve room for `additional` more entries
    pub fn reserve(&mut self, additional: usize) {
        self.indices.reserve(additional);
        self.values.reserve(additional);
    }

    /// Remove every entry, keeping the shape
    pub fn clear(&mut self) {
        self.indices.clear();
        self.values.clear();
        self.sort_order = None;
    }

    /// Number of stored entries, duplicates included
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn indices(&self) -> &[[I; RANK]] {
        &self.indices
    }

    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Values may be edited in place; coordinates may not
    #[inline]
    pub fn values_mut(&mut self) -> &mut [V] {
        &mut self.values
    }

    /// Index tuples as one flat buffer of length `len() * RANK`
    pub fn flat_indices(&self) -> &[I] {
        if RANK == 0 {
            return &[];
        }
        bytemuck::cast_slice(self.indices.as_slice())
    }

    /// The indices of dimension `dim`, one per entry
    ///
    /// # Panics
    ///
    /// Panics if `dim >= RANK`.
    pub fn dim_indices(&self, dim: usize) -> impl Iterator<Item = I> + '_ {
        assert!(dim < RANK, "dimension {dim} out of range for rank {RANK}");
        self.indices.iter().map(move |index| index[dim])
    }

    /// Entry at position `k` in storage order
    pub fn entry(&self, k: usize) -> Option<Entry<I, V, RANK>> {
        Some(Entry {
            index: *self.indices.get(k)?,
            value: *self.values.get(k)?,
        })
    }

    /// Iterate over entries in storage order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Entry<I, V, RANK>> + '_ {
        self.indices
            .iter()
            .zip(&self.values)
            .map(|(&index, &value)| Entry { index, value })
    }

    /// The order entries are currently known to be sorted by
    #[inline]
    pub fn sort_order(&self) -> Option<SortOrder<RANK>> {
        self.sort_order
    }

    /// Replace the entry buffers after a reordering
    pub(crate) fn set_sorted(
        &mut self,
        indices: Vec<[I; RANK]>,
        values: Vec<V>,
        order: SortOrder<RANK>,
    ) {
        self.indices = indices;
        self.values = values;
        self.sort_order = Some(order);
    }

    pub(crate) fn mark_sorted(&mut self, order: SortOrder<RANK>) {
        self.sort_order = Some(order);
    }
}

impl<I: SparseIndex, V: SparseValue, const RANK: usize> SparseArray<RANK> for CooArray<I, V, RANK> {
    type Index = I;
    type Value = V;

    fn shape(&self) -> [usize; RANK] {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.len()
    }
}

impl<I: SparseIndex, V: SparseValue, const RANK: usize> core::fmt::Display
    for CooArray<I, V, RANK>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "CooArray {} ({} entries)", IndexTuple(&self.shape), self.len())?;
        for entry in self.iter() {
            writeln!(f, "  {entry}")?;
        }
        Ok(())
    }
}
