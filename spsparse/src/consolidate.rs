//! Merging duplicate coordinates
//!
//! Consolidation turns a coordinate array with repeated tuples into one
//! with unique tuples, combining the values of each run of duplicates
//! according to a [`DuplicatePolicy`].

use spsparse_core::{
    DuplicatePolicy, SortOrder, SparseArray, SparseIndex, SparseValue, SpsparseError,
};
use tracing::debug;

use crate::coo::CooArray;
use crate::handler::raise;
use crate::Result;

/// Configuration for consolidation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsolidateConfig {
    /// How duplicate entries are combined
    pub policy: DuplicatePolicy,
    /// Treat NaN as none in addition to zero
    pub zero_nan: bool,
    /// Drop merged entries whose value is none
    pub eliminate_none: bool,
}

impl ConsolidateConfig {
    /// Create config with a duplicate policy
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            zero_nan: false,
            eliminate_none: false,
        }
    }

    /// Set the duplicate policy
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set whether NaN counts as none
    pub fn with_zero_nan(mut self, zero_nan: bool) -> Self {
        self.zero_nan = zero_nan;
        self
    }

    /// Set whether none entries are dropped
    pub fn with_eliminate_none(mut self, eliminate_none: bool) -> Self {
        self.eliminate_none = eliminate_none;
        self
    }
}

impl Default for ConsolidateConfig {
    fn default() -> Self {
        Self::new(DuplicatePolicy::default())
    }
}

/// Find the identity or reversed order an unmarked array already follows
fn detect_order<I: Ord, const RANK: usize>(indices: &[[I; RANK]]) -> Option<SortOrder<RANK>> {
    [SortOrder::identity(), SortOrder::reversed()]
        .into_iter()
        .find(|order| order.is_sorted(indices))
}

/// Merge duplicate coordinates of `array` into a new array
///
/// If `array` is known to be sorted, or its entries already follow the
/// identity or reversed order, duplicates are adjacent and that order is
/// kept. Otherwise it is sorted first, first dimension most significant.
/// The result has unique index tuples and records the order it is sorted
/// by.
///
/// A coordinate array is a sparse destination, so
/// `DuplicatePolicy::ReplaceThenAdd` is rejected through the error
/// handler before any work is done. An integer `Add` that overflows the
/// value type is reported as `SpsparseError::ValueOverflow`.
pub fn consolidate<I: SparseIndex, V: SparseValue, const RANK: usize>(
    array: &CooArray<I, V, RANK>,
    config: &ConsolidateConfig,
) -> Result<CooArray<I, V, RANK>> {
    if config.policy.requires_dense() {
        return Err(raise(SpsparseError::ReplaceThenAddOnSparse));
    }

    let resorted;
    let (src, order) = match array.sort_order().or_else(|| detect_order(array.indices())) {
        Some(order) => (array, order),
        None => {
            let order = SortOrder::identity();
            resorted = array.sorted(order);
            (&resorted, order)
        }
    };

    let in_indices = src.indices();
    let in_values = src.values();
    let n = in_indices.len();
    let mut indices = Vec::with_capacity(n);
    let mut values = Vec::with_capacity(n);

    let mut k = 0;
    while k < n {
        let index = in_indices[k];
        let mut merged = in_values[k];
        let mut j = k + 1;
        while j < n && in_indices[j] == index {
            merged = config
                .policy
                .combine(merged, in_values[j], config.zero_nan)
                .map_err(raise)?;
            j += 1;
        }
        if !(config.eliminate_none && merged.is_none(config.zero_nan)) {
            indices.push(index);
            values.push(merged);
        }
        k = j;
    }

    debug!(
        input = n,
        output = indices.len(),
        policy = %config.policy,
        %order,
        "consolidated coordinate array"
    );
    Ok(CooArray::from_sorted_parts(src.shape(), indices, values, order))
}

impl<I: SparseIndex, V: SparseValue, const RANK: usize> CooArray<I, V, RANK> {
    /// Merge duplicate coordinates, replacing this array's contents
    pub fn consolidate_in_place(&mut self, config: &ConsolidateConfig) -> Result<()> {
        *self = consolidate(self, config)?;
        Ok(())
    }

    /// Whether no two entries share an index tuple
    pub fn has_unique_indices(&self) -> bool {
        let order = self.sort_order().unwrap_or_default();
        let sorted;
        let indices = if order.is_sorted(self.indices()) {
            self.indices()
        } else {
            sorted = self.sorted(order);
            sorted.indices()
        };
        indices.windows(2).all(|w| w[0] != w[1])
    }
}
