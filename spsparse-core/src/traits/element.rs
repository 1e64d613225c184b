//! Value type constraints for sparse arrays
//!
//! This module defines the trait that constrains what types can be
//! stored as values in SpSparse arrays, and the "none" classifier that
//! consolidation uses to drop absent entries.

use core::ops::Add;

/// Value representations supported by SpSparse arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    F32,
    F64,
    I32,
    I64,
    U32,
    U64,
    C32,
    C64,
}

impl ValueType {
    /// Get the size in bytes for this value type
    pub const fn size_bytes(&self) -> usize {
        match self {
            ValueType::F32 | ValueType::I32 | ValueType::U32 => 4,
            ValueType::F64 | ValueType::I64 | ValueType::U64 | ValueType::C32 => 8,
            ValueType::C64 => 16,
        }
    }

    /// Whether values of this type can be NaN
    pub const fn has_nan(&self) -> bool {
        matches!(
            self,
            ValueType::F32 | ValueType::F64 | ValueType::C32 | ValueType::C64
        )
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueType::F32 => write!(f, "f32"),
            ValueType::F64 => write!(f, "f64"),
            ValueType::I32 => write!(f, "i32"),
            ValueType::I64 => write!(f, "i64"),
            ValueType::U32 => write!(f, "u32"),
            ValueType::U64 => write!(f, "u64"),
            ValueType::C32 => write!(f, "complex<f32>"),
            ValueType::C64 => write!(f, "complex<f64>"),
        }
    }
}

/// Trait for types that can be stored as sparse array values
///
/// Every implementation supplies its own `is_none`; there is no blanket
/// default, because "zero or NaN" means different things for scalars and
/// composite types such as complex numbers.
pub trait SparseValue: Copy + PartialEq + Add<Output = Self> + core::fmt::Debug {
    /// Get the SpSparse ValueType representation for this type
    fn value_type() -> ValueType;

    /// The additive identity
    fn zero() -> Self;

    /// Whether this value is "none": exactly zero, or NaN when `zero_nan` is set
    fn is_none(self, zero_nan: bool) -> bool;

    /// Sum of two values, `None` if an integer sum overflows
    fn try_add(self, rhs: Self) -> Option<Self>;

    /// Get the size in bytes of this value type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }
}

/// Free-function form of [`SparseValue::is_none`]
#[inline]
pub fn isnone<V: SparseValue>(value: V, zero_nan: bool) -> bool {
    value.is_none(zero_nan)
}

macro_rules! impl_float_value {
    ($t:ty, $vt:expr) => {
        impl SparseValue for $t {
            fn value_type() -> ValueType {
                $vt
            }

            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn is_none(self, zero_nan: bool) -> bool {
                if zero_nan {
                    self.is_nan() || self == 0.0
                } else {
                    self == 0.0
                }
            }

            #[inline]
            fn try_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
        }
    };
}

macro_rules! impl_int_value {
    ($t:ty, $vt:expr) => {
        impl SparseValue for $t {
            fn value_type() -> ValueType {
                $vt
            }

            fn zero() -> Self {
                0
            }

            #[inline]
            fn is_none(self, _zero_nan: bool) -> bool {
                self == 0
            }

            #[inline]
            fn try_add(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }
        }
    };
}

impl_float_value!(f32, ValueType::F32);
impl_float_value!(f64, ValueType::F64);
impl_int_value!(i32, ValueType::I32);
impl_int_value!(i64, ValueType::I64);
impl_int_value!(u32, ValueType::U32);
impl_int_value!(u64, ValueType::U64);

#[cfg(feature = "complex")]
mod complex {
    use super::{SparseValue, ValueType};
    use num_complex::Complex;

    macro_rules! impl_complex_value {
        ($t:ty, $vt:expr) => {
            impl SparseValue for Complex<$t> {
                fn value_type() -> ValueType {
                    $vt
                }

                fn zero() -> Self {
                    Complex::new(0.0, 0.0)
                }

                // NaN in either component makes the whole value NaN
                #[inline]
                fn is_none(self, zero_nan: bool) -> bool {
                    if zero_nan && (self.re.is_nan() || self.im.is_nan()) {
                        return true;
                    }
                    self.re == 0.0 && self.im == 0.0
                }

                #[inline]
                fn try_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        };
    }

    impl_complex_value!(f32, ValueType::C32);
    impl_complex_value!(f64, ValueType::C64);
}
