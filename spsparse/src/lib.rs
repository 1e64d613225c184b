//! SpSparse - generic N-dimensional coordinate-format sparse arrays
//!
//! This library stores sparse arrays as lists of (index tuple, value)
//! records, sorts them by any dimension permutation, and consolidates
//! duplicate coordinates under a configurable policy.
//!
//! ## Architecture
//!
//! SpSparse follows a definitions/implementation split:
//!
//! - **spsparse-core**: error enum, duplicate policy, value and index traits,
//!   sort orders and validation (no allocation, `no_std`)
//! - **spsparse**: containers, sorting, consolidation, and the error handler
//!
//! ## Quick Start
//!
//! ```rust
//! use spsparse::{consolidate, ConsolidateConfig, CooArray, DuplicatePolicy, ROW_MAJOR};
//!
//! fn example() -> spsparse::Result<()> {
//!     let mut a = CooArray::<i32, f64, 2>::new([4, 4])?;
//!     a.add([1, 1], 3.0)?;
//!     a.add([0, 2], 1.0)?;
//!     a.add([1, 1], 4.0)?;
//!
//!     a.sort(ROW_MAJOR);
//!     let c = consolidate(&a, &ConsolidateConfig::new(DuplicatePolicy::Add))?;
//!     assert_eq!(c.indices(), &[[0, 2], [1, 1]]);
//!     assert_eq!(c.values(), &[1.0, 7.0]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Errors
//!
//! Usage errors (bad permutations, out-of-range indices, shape mismatches,
//! `ReplaceThenAdd` against a sparse destination) are routed through a
//! single process-wide handler, see [`set_error_handler`].
//!
//! ## Features
//!
//! - **parallel**: sort large arrays on the rayon thread pool
//! - **complex**: `num_complex::Complex<f32|f64>` values
//! - **serde**: derive serde traits on policy and type tags

// Re-export core abstractions
pub use spsparse_core::{
    // Core traits
    SparseArray, SparseIndex, SparseValue,
    // Type tags and classification
    isnone, IndexType, ValueType,
    // Policies and orders
    DuplicatePolicy, SortOrder, COL_MAJOR, ROW_MAJOR,
    // Errors and formatting
    IndexTuple, SpsparseError,
};

pub mod consolidate;
pub mod coo;
pub mod dense;
pub mod handler;
pub mod map;
pub mod merge;
pub mod sort;

pub use consolidate::{consolidate, ConsolidateConfig};
pub use coo::{CooArray, Entry};
pub use dense::DenseArray;
pub use handler::{
    error_handler, raise, set_error_handler, DefaultHandler, ErrorHandler, Exception,
    HandlerAlreadySet,
};
pub use map::SparseMap;
pub use merge::{merge_into, MergeTarget};
pub use sort::{apply_permutation, sort_permutation};

/// Result type for SpSparse operations
pub type Result<T> = core::result::Result<T, Exception>;
