//! Dimension permutations used as sort orders
//!
//! A sort order lists dimensions from most to least significant.
//! Index tuples are compared lexicographically in that order.

use core::cmp::Ordering;

use crate::validation::validate_permutation;

/// A validated permutation of `0..RANK`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOrder<const RANK: usize> {
    dims: [usize; RANK],
}

/// Compare dimension 0 first, then dimension 1
pub const ROW_MAJOR: SortOrder<2> = SortOrder { dims: [0, 1] };

/// Compare dimension 1 first, then dimension 0
pub const COL_MAJOR: SortOrder<2> = SortOrder { dims: [1, 0] };

impl<const RANK: usize> SortOrder<RANK> {
    /// Create a sort order, rejecting anything that is not a bijection
    pub fn new(dims: [usize; RANK]) -> crate::Result<Self> {
        validate_permutation(&dims)?;
        Ok(Self { dims })
    }

    /// First dimension most significant (row-major for rank 2)
    pub const fn identity() -> Self {
        let mut dims = [0; RANK];
        let mut d = 0;
        while d < RANK {
            dims[d] = d;
            d += 1;
        }
        Self { dims }
    }

    /// Last dimension most significant (column-major for rank 2)
    pub const fn reversed() -> Self {
        let mut dims = [0; RANK];
        let mut d = 0;
        while d < RANK {
            dims[d] = RANK - 1 - d;
            d += 1;
        }
        Self { dims }
    }

    /// Dimensions in priority order
    pub const fn dims(&self) -> &[usize; RANK] {
        &self.dims
    }

    /// Lexicographic comparison of two index tuples in this order
    #[inline]
    pub fn compare<I: Ord>(&self, a: &[I; RANK], b: &[I; RANK]) -> Ordering {
        for &d in &self.dims {
            match a[d].cmp(&b[d]) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// Whether a sequence of tuples is non-decreasing in this order
    pub fn is_sorted<I: Ord>(&self, indices: &[[I; RANK]]) -> bool {
        indices
            .windows(2)
            .all(|w| self.compare(&w[0], &w[1]) != Ordering::Greater)
    }
}

impl<const RANK: usize> Default for SortOrder<RANK> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const RANK: usize> core::fmt::Display for SortOrder<RANK> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", crate::IndexTuple(&self.dims))
    }
}
