//! Formatting helpers

/// Writes a tuple as `{a, b, c}`, or `{}` when empty
///
/// ```
/// use spsparse_core::IndexTuple;
///
/// assert_eq!(IndexTuple(&[3, 4]).to_string(), "{3, 4}");
/// assert_eq!(IndexTuple::<i32>(&[]).to_string(), "{}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IndexTuple<'a, T>(pub &'a [T]);

impl<T: core::fmt::Display> core::fmt::Display for IndexTuple<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{{")?;
        for (k, item) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
