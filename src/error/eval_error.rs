use thiserror::Error;

use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// An operator found fewer operands on the stack than it consumes.
    #[error("Operator '{operator}' is missing an operand.")]
    StackUnderflow {
        /// The operator that could not be applied.
        operator: Operator,
    },
    /// The sequence did not reduce to exactly one value.
    #[error("Expression is malformed: {remaining} values left after evaluation, expected 1.")]
    MalformedExpression {
        /// The number of values left on the operand stack.
        remaining: usize,
    },
    /// Division or modulo with a zero divisor.
    #[error("Division by zero: {dividend} {operator} 0.")]
    DivisionByZero {
        /// The operator, `/` or `%`.
        operator: Operator,
        /// The left-hand operand.
        dividend: f64,
    },
    /// A power with a negative or fractional exponent, or a root of degree
    /// zero.
    #[error("Invalid exponent {exponent} for '{operator}'.")]
    InvalidExponent {
        /// The operator, `^` or `√`.
        operator: Operator,
        /// The rejected exponent or degree.
        exponent: f64,
    },
    /// Factorial of a negative or fractional number.
    #[error("Factorial is only defined for non-negative integers, but found {operand}.")]
    InvalidFactorialOperand {
        /// The rejected operand.
        operand: f64,
    },
}
