use crate::{
    ast::Operator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::is_integral,
};

/// Raises `x` to the power `n`.
///
/// The exponent must be a natural number: integral and non-negative.
///
/// # Errors
/// Returns [`EvalError::InvalidExponent`] if `n` is fractional or negative.
///
/// # Example
/// ```
/// use redcalc::interpreter::evaluator::binary::pow;
///
/// assert_eq!(pow(5.0, 2.0).unwrap(), 25.0);
/// assert_eq!(pow(-0.5, 3.0).unwrap(), -0.125);
/// assert_eq!(pow(864654.23265, 0.0).unwrap(), 1.0);
/// assert!(pow(123.0, -2.0).is_err());
/// assert!(pow(456.0, 1.2).is_err());
/// ```
pub fn pow(x: f64, n: f64) -> EvalResult<f64> {
    if !is_integral(n) || n < 0.0 {
        return Err(EvalError::InvalidExponent { operator: Operator::Pow,
                                                exponent: n, });
    }

    Ok(x.powf(n))
}

/// Computes the `n`-th root of `x` as `x^(1/n)`.
///
/// The degree may be any non-zero real; a negative degree gives the
/// reciprocal root, so `root(8, -3)` is `0.5`.
///
/// A negative radicand has no real root for most degrees. This is not
/// validated: the result is whatever `f64::powf` yields, typically `NaN`.
///
/// # Errors
/// Returns [`EvalError::InvalidExponent`] if `n` is zero.
///
/// # Example
/// ```
/// use redcalc::interpreter::evaluator::binary::root;
///
/// assert_eq!(root(16.0, 2.0).unwrap(), 4.0);
/// assert_eq!(root(20.0, 1.0).unwrap(), 20.0);
/// assert!(root(-4.0, 2.0).unwrap().is_nan());
/// assert!(root(545.0, 0.0).is_err());
/// ```
pub fn root(x: f64, n: f64) -> EvalResult<f64> {
    if n == 0.0 {
        return Err(EvalError::InvalidExponent { operator: Operator::Root,
                                                exponent: n, });
    }

    Ok(x.powf(1.0 / n))
}
