//! Validation utilities for SpSparse arrays
//!
//! Pure functions over index tuples, shapes and permutations.

pub mod bounds;
pub mod permutation;

pub use bounds::{dense_len, validate_index, validate_lengths, validate_shape_fits};
pub use permutation::validate_permutation;
