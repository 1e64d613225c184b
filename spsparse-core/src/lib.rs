#![cfg_attr(not(test), no_std)]

//! SpSparse Core - shared definitions for coordinate-format sparse arrays
//!
//! This crate provides the pieces every SpSparse container builds on:
//! error types, the duplicate-entry policy, value and index traits, sort
//! orders, and validation. It performs no allocation.

pub mod display;
pub mod error;
pub mod order;
pub mod policy;
pub mod traits;
pub mod validation;

pub use display::IndexTuple;
pub use error::*;
pub use order::{SortOrder, COL_MAJOR, ROW_MAJOR};
pub use policy::DuplicatePolicy;
pub use traits::*;
pub use validation::{
    dense_len, validate_index, validate_lengths, validate_permutation, validate_shape_fits,
};
