/// Returns `true` if `value` is finite and has no fractional part.
///
/// ## Example
/// ```
/// use redcalc::util::num::is_integral;
///
/// assert!(is_integral(4.0));
/// assert!(is_integral(-0.0));
/// assert!(!is_integral(2.5));
/// assert!(!is_integral(f64::INFINITY));
/// assert!(!is_integral(f64::NAN));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Converts an `f64` to `i64` if and only if the conversion is exact.
///
/// ## Returns
/// - `Some(i64)`: The value is integral and within the `i64` range.
/// - `None`: The value is fractional, non-finite, or out of range.
///
/// ## Example
/// ```
/// use redcalc::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(120.0), Some(120));
/// assert_eq!(f64_to_i64_exact(-3.0), Some(-3));
/// assert_eq!(f64_to_i64_exact(0.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if !is_integral(value) || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }

    Some(value as i64)
}
