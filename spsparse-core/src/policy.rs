//! Duplicate-entry resolution policy

use crate::traits::SparseValue;
use crate::SpsparseError;

/// What to do when two entries share the same coordinates
///
/// - `Add` (default): sum them together.
/// - `LeaveAlone`: keep the first value encountered.
/// - `Replace`: keep the last value encountered.
/// - `ReplaceThenAdd`: dense destinations only. Replace the existing
///   value if it is none, otherwise add to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicatePolicy {
    LeaveAlone,
    #[default]
    Add,
    Replace,
    ReplaceThenAdd,
}

impl DuplicatePolicy {
    /// Whether this policy may only target a dense destination
    pub const fn requires_dense(&self) -> bool {
        matches!(self, DuplicatePolicy::ReplaceThenAdd)
    }

    /// Combine an existing value with an incoming duplicate
    ///
    /// `zero_nan` only matters for `ReplaceThenAdd`. Integer sums that
    /// overflow are reported as `ValueOverflow`.
    #[inline]
    pub fn combine<V: SparseValue>(
        &self,
        existing: V,
        incoming: V,
        zero_nan: bool,
    ) -> crate::Result<V> {
        let sum = || existing.try_add(incoming).ok_or(SpsparseError::ValueOverflow);
        match self {
            DuplicatePolicy::LeaveAlone => Ok(existing),
            DuplicatePolicy::Add => sum(),
            DuplicatePolicy::Replace => Ok(incoming),
            DuplicatePolicy::ReplaceThenAdd => {
                if existing.is_none(zero_nan) {
                    Ok(incoming)
                } else {
                    sum()
                }
            }
        }
    }
}

impl core::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            DuplicatePolicy::LeaveAlone => "LEAVE_ALONE",
            DuplicatePolicy::Add => "ADD",
            DuplicatePolicy::Replace => "REPLACE",
            DuplicatePolicy::ReplaceThenAdd => "REPLACE_THEN_ADD",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_add() {
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Add);
    }

    #[test]
    fn test_combine() {
        assert_eq!(DuplicatePolicy::Add.combine(3.0, 4.0, false), Ok(7.0));
        assert_eq!(DuplicatePolicy::LeaveAlone.combine(3.0, 4.0, false), Ok(3.0));
        assert_eq!(DuplicatePolicy::Replace.combine(3.0, 4.0, false), Ok(4.0));

        // Existing zero is replaced, existing non-zero is added to
        assert_eq!(DuplicatePolicy::ReplaceThenAdd.combine(0.0, 4.0, false), Ok(4.0));
        assert_eq!(DuplicatePolicy::ReplaceThenAdd.combine(3.0, 4.0, false), Ok(7.0));

        // NaN is only treated as none under zero_nan
        let r = DuplicatePolicy::ReplaceThenAdd.combine(f64::NAN, 4.0, true);
        assert_eq!(r, Ok(4.0));
        let r = DuplicatePolicy::ReplaceThenAdd.combine(f64::NAN, 4.0, false);
        assert!(r.unwrap().is_nan());
    }

    #[test]
    fn test_combine_integer_overflow() {
        assert_eq!(
            DuplicatePolicy::Add.combine(i32::MAX, 1, false),
            Err(SpsparseError::ValueOverflow)
        );
        assert_eq!(
            DuplicatePolicy::ReplaceThenAdd.combine(u64::MAX, 1, false),
            Err(SpsparseError::ValueOverflow)
        );
        // Policies that never add cannot overflow
        assert_eq!(DuplicatePolicy::Replace.combine(i32::MAX, 1, false), Ok(1));
        assert_eq!(
            DuplicatePolicy::LeaveAlone.combine(i32::MAX, 1, false),
            Ok(i32::MAX)
        );
        // Existing zero is replaced rather than summed
        assert_eq!(
            DuplicatePolicy::ReplaceThenAdd.combine(0i64, i64::MAX, false),
            Ok(i64::MAX)
        );
    }

    #[test]
    fn test_requires_dense() {
        assert!(DuplicatePolicy::ReplaceThenAdd.requires_dense());
        assert!(!DuplicatePolicy::Add.requires_dense());
        assert!(!DuplicatePolicy::LeaveAlone.requires_dense());
        assert!(!DuplicatePolicy::Replace.requires_dense());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&DuplicatePolicy::ReplaceThenAdd).unwrap();
        let back: DuplicatePolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DuplicatePolicy::ReplaceThenAdd);
    }
}
