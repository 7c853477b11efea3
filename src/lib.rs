//! # redcalc
//!
//! redcalc is a calculator engine written in Rust. It converts infix
//! expressions to postfix with the shunting-yard algorithm, evaluates the
//! postfix sequence on an operand stack, and provides the keystroke rules of
//! a calculator display that produces those expressions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcResult,
    interpreter::{evaluator::core::eval_postfix, parser::core::parse, value::core::Number},
};

/// Defines the operators and the postfix sequence.
///
/// This module declares the `Operator` enum with its fixed precedence table,
/// and the `Postfix` sequence the parser produces and the evaluator consumes.
///
/// # Responsibilities
/// - Defines the eight operators, their symbols and arity.
/// - Provides the immutable precedence lookup used by the parser.
pub mod ast;
/// Batch runs over a whole input text.
///
/// Evaluates a list of expressions, replays keystrokes on a display, or
/// computes a deviation, collecting the printed lines and the errors in a
/// `Report` for the command-line front end.
pub mod batch;
/// The calculator display.
///
/// This module implements the rules that turn raw keystrokes into a
/// well-spaced expression the parser accepts, and an editing session that
/// evaluates the display and shows `ERROR` on failure.
pub mod display;
/// Provides error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating an expression. Every failure is a value; none of them aborts the
/// process.
///
/// # Responsibilities
/// - Defines error enums for both phases.
/// - Attaches the offending token, operand or position to each error.
/// - Joins both phases in `CalcError` for the combined entry point.
pub mod error;
/// Orchestrates parsing and evaluation.
///
/// This module ties together the lexer, the shunting-yard parser, the postfix
/// evaluator, and the result type.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for each phase on its own.
pub mod interpreter;
/// Descriptive statistics on top of the arithmetic primitives.
///
/// A consumer of the calculator's primitives: reads a list of numbers and
/// computes their sample standard deviation.
pub mod stats;
/// General utilities for floating-point handling.
///
/// # Responsibilities
/// - Decide whether an `f64` is integral.
/// - Convert between `f64` and `i64` without silent data loss.
pub mod util;

/// Parses and evaluates an infix expression.
///
/// Tokens must be separated by whitespace. The text is converted to postfix
/// with [`interpreter::parser::core::parse`] and reduced with
/// [`interpreter::evaluator::core::eval_postfix`].
///
/// The call is self-contained: no state is shared between calls.
///
/// # Errors
/// Returns [`error::CalcError::Parse`] for malformed tokens or unbalanced
/// parentheses, and [`error::CalcError::Eval`] for malformed expressions and
/// domain errors.
///
/// # Examples
/// ```
/// use redcalc::{evaluate, interpreter::value::core::Number};
///
/// assert_eq!(evaluate("5 * ( 3 + 6 ) / 15").unwrap(), Number::Integer(3));
/// assert_eq!(evaluate("2 √ 25").unwrap(), Number::Integer(5));
/// assert_eq!(evaluate("1 / 4").unwrap(), Number::Real(0.25));
///
/// // Unbalanced parenthesis.
/// assert!(evaluate("( 3 + 4").is_err());
/// ```
pub fn evaluate(text: &str) -> CalcResult<Number> {
    let postfix = parse(text)?;
    Ok(eval_postfix(&postfix)?)
}
