//! Index type constraints for sparse arrays

use bytemuck::Pod;

/// Integer representations usable as coordinate indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexType {
    I32,
    I64,
    U32,
    U64,
    Usize,
}

impl core::fmt::Display for IndexType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IndexType::I32 => write!(f, "i32"),
            IndexType::I64 => write!(f, "i64"),
            IndexType::U32 => write!(f, "u32"),
            IndexType::U64 => write!(f, "u64"),
            IndexType::Usize => write!(f, "usize"),
        }
    }
}

/// Trait for integer types that can index a sparse array dimension
///
/// `Pod` lets a slice of index tuples be viewed as one flat index buffer
/// without copying.
pub trait SparseIndex:
    Pod + Ord + core::hash::Hash + core::fmt::Debug + core::fmt::Display + Send + Sync
{
    /// Get the SpSparse IndexType representation for this type
    fn index_type() -> IndexType;

    /// Convert to a position, or `None` if negative or too large
    fn to_usize(self) -> Option<usize>;

    /// Convert from a position, or `None` if it does not fit
    fn from_usize(value: usize) -> Option<Self>;

    /// Whether the value is below zero
    fn is_negative(self) -> bool;
}

macro_rules! impl_signed_index {
    ($t:ty, $it:expr) => {
        impl SparseIndex for $t {
            fn index_type() -> IndexType {
                $it
            }

            #[inline]
            fn to_usize(self) -> Option<usize> {
                usize::try_from(self).ok()
            }

            #[inline]
            fn from_usize(value: usize) -> Option<Self> {
                <$t>::try_from(value).ok()
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }
        }
    };
}

macro_rules! impl_unsigned_index {
    ($t:ty, $it:expr) => {
        impl SparseIndex for $t {
            fn index_type() -> IndexType {
                $it
            }

            #[inline]
            fn to_usize(self) -> Option<usize> {
                usize::try_from(self).ok()
            }

            #[inline]
            fn from_usize(value: usize) -> Option<Self> {
                <$t>::try_from(value).ok()
            }

            #[inline]
            fn is_negative(self) -> bool {
                false
            }
        }
    };
}

impl_signed_index!(i32, IndexType::I32);
impl_signed_index!(i64, IndexType::I64);
impl_unsigned_index!(u32, IndexType::U32);
impl_unsigned_index!(u64, IndexType::U64);
impl_unsigned_index!(usize, IndexType::Usize);
