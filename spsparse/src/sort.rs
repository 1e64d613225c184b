//! Sorting coordinate arrays by a dimension permutation
//!
//! Sorting is stable: entries with identical index tuples keep their
//! insertion order, which is what gives `LeaveAlone` and `Replace`
//! their first/last meaning during consolidation.

use std::cmp::Ordering;

use spsparse_core::{SortOrder, SparseIndex, SparseValue};
use tracing::{debug, trace};

use crate::coo::CooArray;
use crate::handler::raise;
use crate::Result;

/// Arrays at least this long are sorted on the rayon pool
#[cfg(feature = "parallel")]
const PARALLEL_SORT_THRESHOLD: usize = 16384;

/// Compute the stable ordering of `indices` under `order`
///
/// Entry `k` of the result is the position in `indices` of the `k`th
/// tuple in sorted order.
pub fn sort_permutation<I: SparseIndex, const RANK: usize>(
    indices: &[[I; RANK]],
    order: &SortOrder<RANK>,
) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..indices.len()).collect();
    let cmp = |a: &usize, b: &usize| -> Ordering { order.compare(&indices[*a], &indices[*b]) };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if perm.len() >= PARALLEL_SORT_THRESHOLD {
            perm.par_sort_by(cmp);
            return perm;
        }
    }

    perm.sort_by(cmp);
    perm
}

/// Gather `data` in the order given by `perm`
pub fn apply_permutation<T: Copy>(data: &[T], perm: &[usize]) -> Vec<T> {
    perm.iter().map(|&k| data[k]).collect()
}

impl<I: SparseIndex, V: SparseValue, const RANK: usize> CooArray<I, V, RANK> {
    /// Sort entries in place by `order`
    pub fn sort(&mut self, order: SortOrder<RANK>) {
        if self.sort_order() == Some(order) {
            trace!(nnz = self.len(), %order, "already sorted");
            return;
        }
        if order.is_sorted(self.indices()) {
            trace!(nnz = self.len(), %order, "input already in order");
            self.mark_sorted(order);
            return;
        }

        let perm = sort_permutation(self.indices(), &order);
        let indices = apply_permutation(self.indices(), &perm);
        let values = apply_permutation(self.values(), &perm);
        self.set_sorted(indices, values, order);
        debug!(nnz = self.len(), %order, "sorted coordinate array");
    }

    /// Sort entries in place by a permutation given as raw dimensions
    ///
    /// Anything other than a permutation of `0..RANK` is a usage error.
    pub fn sort_by_dims(&mut self, dims: [usize; RANK]) -> Result<()> {
        let order = SortOrder::new(dims).map_err(raise)?;
        self.sort(order);
        Ok(())
    }

    /// A sorted copy of this array
    pub fn sorted(&self, order: SortOrder<RANK>) -> Self {
        let mut out = self.clone();
        out.sort(order);
        out
    }
}
