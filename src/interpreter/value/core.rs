use crate::util::num::f64_to_i64_exact;

/// The result of a successful evaluation.
///
/// Arithmetic is carried out on `f64` throughout. Only the final value is
/// normalized: a result with no fractional part becomes
/// [`Number::Integer`], so `4 / 2` yields `2` rather than `2.0`. Everything
/// else, including `NaN` and infinities, stays [`Number::Real`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integral result.
    Integer(i64),
    /// A result with a fractional part, or one outside the `i64` range.
    Real(f64),
}

impl Number {
    /// Applies the integral normalization to a raw evaluation result.
    ///
    /// # Example
    /// ```
    /// use redcalc::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::normalize(2.0), Number::Integer(2));
    /// assert_eq!(Number::normalize(-0.0), Number::Integer(0));
    /// assert_eq!(Number::normalize(0.5), Number::Real(0.5));
    /// assert!(matches!(Number::normalize(f64::NAN), Number::Real(r) if r.is_nan()));
    /// ```
    #[must_use]
    pub fn normalize(value: f64) -> Self {
        f64_to_i64_exact(value).map_or(Self::Real(value), Self::Integer)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
