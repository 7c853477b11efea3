use crate::{error::EvalError, interpreter::evaluator::core::EvalResult, util::num::is_integral};

/// Computes `a!` as the product `2 * 3 * ... * a`.
///
/// The operand must be a natural number. `0!` and `1!` are `1`.
///
/// The product is accumulated in `f64`, so it overflows to infinity from
/// `171!` on; the loop stops there since the result can no longer change.
/// Below that point the running time is linear in `a`.
///
/// # Errors
/// Returns [`EvalError::InvalidFactorialOperand`] if `a` is negative or
/// fractional.
///
/// # Example
/// ```
/// use redcalc::interpreter::evaluator::unary::factorial;
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert!(factorial(2.5).is_err());
/// assert!(factorial(-1.0).is_err());
/// ```
pub fn factorial(a: f64) -> EvalResult<f64> {
    if !is_integral(a) || a < 0.0 {
        return Err(EvalError::InvalidFactorialOperand { operand: a });
    }

    let mut result: f64 = 1.0;
    let mut factor = 2.0;
    while factor <= a && result.is_finite() {
        result *= factor;
        factor += 1.0;
    }

    Ok(result)
}
