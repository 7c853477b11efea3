use crate::{
    ast::Operator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Returns `a + b`.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
#[must_use]
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
#[must_use]
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] if `b` is zero.
///
/// # Example
/// ```
/// use redcalc::interpreter::evaluator::binary::div;
///
/// assert_eq!(div(-28.0, 0.5).unwrap(), -56.0);
/// assert!(div(5.0, 0.0).is_err());
/// ```
pub fn div(a: f64, b: f64) -> EvalResult<f64> {
    if b == 0.0 {
        return Err(EvalError::DivisionByZero { operator: Operator::Div,
                                               dividend: a, });
    }

    Ok(a / b)
}

/// Computes `a` modulo `b` with the sign of the divisor.
///
/// This is floored modulo: the result lies between `0` and `b`, so
/// `11 mod -10` is `-9` and `-7 mod 3` is `2`.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] if `b` is zero.
///
/// # Example
/// ```
/// use redcalc::interpreter::evaluator::binary::modulo;
///
/// assert_eq!(modulo(5.0, 2.0).unwrap(), 1.0);
/// assert_eq!(modulo(11.0, -10.0).unwrap(), -9.0);
/// assert_eq!(modulo(3.5, 2.0).unwrap(), 1.5);
/// assert!(modulo(5454.0, 0.0).is_err());
/// ```
pub fn modulo(a: f64, b: f64) -> EvalResult<f64> {
    if b == 0.0 {
        return Err(EvalError::DivisionByZero { operator: Operator::Mod,
                                               dividend: a, });
    }

    let remainder = a % b;
    if remainder != 0.0 && (remainder < 0.0) != (b < 0.0) {
        Ok(remainder + b)
    } else {
        Ok(remainder)
    }
}
