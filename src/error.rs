/// Parsing errors.
///
/// Defines the errors raised while splitting the input into tokens and
/// reordering them into postfix form: unreadable literals and mismatched
/// parentheses.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all errors raised while the postfix sequence is consumed: operand
/// stack underflow, leftover operands, and the domain errors of the
/// arithmetic primitives.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
use thiserror::Error;

/// Any failure produced by [`crate::evaluate`].
///
/// Parsing and evaluation keep separate error types so each phase can be used
/// on its own; this enum joins them for the single text-in, number-out entry
/// point. Both conversions are derived, so `?` works across the two phases.
///
/// # Example
/// ```
/// use redcalc::error::{CalcError, EvalError, ParseError};
///
/// let err = redcalc::evaluate("( 3 + 4").unwrap_err();
/// assert!(matches!(err, CalcError::Parse(ParseError::UnbalancedParenthesis { .. })));
///
/// let err = redcalc::evaluate("5 / 0").unwrap_err();
/// assert!(matches!(err, CalcError::Eval(EvalError::DivisionByZero { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The text could not be turned into a postfix sequence.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix sequence could not be reduced to a single number.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result type of the combined parse-and-evaluate entry point.
pub type CalcResult<T> = Result<T, CalcError>;
