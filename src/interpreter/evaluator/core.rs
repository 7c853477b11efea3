use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::{evaluator::stack::OperandStack, lexer::Token, value::core::Number},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a postfix sequence.
///
/// Numbers are pushed onto an [`OperandStack`]; operators pop their operands
/// and push the result. Parentheses never appear in a sequence produced by
/// the parser and are ignored if present.
///
/// The raw `f64` result is passed through [`Number::normalize`].
///
/// # Errors
/// - [`EvalError::StackUnderflow`] if an operator lacks operands.
/// - [`EvalError::MalformedExpression`] if the sequence does not reduce to a
///   single value.
/// - The domain errors of the arithmetic primitives.
///
/// # Example
/// ```
/// use redcalc::{
///     ast::Operator,
///     interpreter::{evaluator::core::eval_postfix, lexer::Token, value::core::Number},
/// };
///
/// let postfix = [Token::Number(5.0), Token::Operator(Operator::Fact)];
/// assert_eq!(eval_postfix(&postfix).unwrap(), Number::Integer(120));
/// ```
pub fn eval_postfix(postfix: &[Token]) -> EvalResult<Number> {
    let mut stack = OperandStack::new();

    for token in postfix {
        match token {
            Token::Number(value) => stack.push(*value),
            Token::Operator(op) => stack.apply(*op)?,
            Token::LeftParen | Token::RightParen => {},
        }
    }

    let result = Number::normalize(stack.finish()?);
    debug!(%result, "evaluated postfix");

    Ok(result)
}
