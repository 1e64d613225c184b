//! Abstract interfaces for SpSparse containers
//!
//! Traits here are pure interfaces; the containers live in `spsparse`.

pub mod array;
pub mod element;
pub mod index;

pub use array::{check_same_shape, SparseArray};
pub use element::{isnone, SparseValue, ValueType};
pub use index::{IndexType, SparseIndex};
