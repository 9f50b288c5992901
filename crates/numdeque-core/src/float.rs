//! Epsilon-aware floating-point equality.

/// Absolute tolerance used when comparing array elements for equality.
pub const EPSILON: f64 = 1e-9;

/// Returns `true` when `a` and `b` differ by strictly less than [`EPSILON`].
///
/// NaN is never equal to anything, including itself.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
