use tracing::trace;

use crate::{
    ast::Operator,
    error::EvalError,
    interpreter::evaluator::{binary::core::eval_binary, core::EvalResult, unary::factorial},
};

/// The operand stack of the postfix evaluator.
///
/// The stack starts out holding a single implicit `0`, the sentinel. It
/// serves as the left operand for an expression that starts with an
/// operator, so `- 5` evaluates to `-5`. Once an operator consumes the
/// sentinel it becomes an ordinary value; until then it is not counted as a
/// result.
///
/// # Example
/// ```
/// use redcalc::{ast::Operator, interpreter::evaluator::stack::OperandStack};
///
/// let mut stack = OperandStack::new();
/// stack.push(5.0);
/// stack.apply(Operator::Sub).unwrap();
/// assert_eq!(stack.finish().unwrap(), -5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OperandStack {
    values:          Vec<f64>,
    sentinel_unused: bool,
}

impl Default for OperandStack {
    fn default() -> Self {
        Self::new()
    }
}

impl OperandStack {
    /// Creates a stack seeded with the implicit `0`.
    #[must_use]
    pub fn new() -> Self {
        Self { values:          vec![0.0],
               sentinel_unused: true, }
    }

    /// Pushes a value.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// The number of values on the stack, not counting an unused sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len() - usize::from(self.sentinel_unused)
    }

    /// Returns `true` if no value besides an unused sentinel is on the stack.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pops one operand for `operator`, consuming the sentinel if it is all
    /// that is left.
    ///
    /// # Errors
    /// Returns [`EvalError::StackUnderflow`] if the stack is empty.
    pub fn pop(&mut self, operator: Operator) -> EvalResult<f64> {
        let value = self.values
                        .pop()
                        .ok_or(EvalError::StackUnderflow { operator })?;

        if self.values.is_empty() {
            self.sentinel_unused = false;
        }

        Ok(value)
    }

    /// Applies `operator` to the operands on top of the stack.
    ///
    /// A binary operator pops its right operand `b`, then its left operand
    /// `a`, and pushes `a OP b`. The factorial pops a single operand.
    ///
    /// # Errors
    /// Returns [`EvalError::StackUnderflow`] if operands are missing, or the
    /// domain error of the operator.
    pub fn apply(&mut self, operator: Operator) -> EvalResult<()> {
        let right = self.pop(operator)?;

        let result = if operator.is_unary() {
            let result = factorial(right)?;
            trace!(%operator, operand = right, result, "applied unary operator");
            result
        } else {
            let left = self.pop(operator)?;
            let result = eval_binary(operator, left, right)?;
            trace!(%operator, left, right, result, "applied binary operator");
            result
        };

        self.push(result);
        Ok(())
    }

    /// Consumes the stack and returns the single result.
    ///
    /// A stack holding nothing but the unused sentinel yields the sentinel,
    /// so an empty expression evaluates to `0`.
    ///
    /// # Errors
    /// Returns [`EvalError::MalformedExpression`] if more than one value, not
    /// counting an unused sentinel, remains.
    ///
    /// # Example
    /// ```
    /// use redcalc::interpreter::evaluator::stack::OperandStack;
    ///
    /// let stack = OperandStack::new();
    /// assert!(stack.is_empty());
    /// assert_eq!(stack.finish().unwrap(), 0.0);
    /// ```
    pub fn finish(self) -> EvalResult<f64> {
        if self.is_empty() && self.sentinel_unused {
            return Ok(0.0);
        }

        match (self.len(), self.values.last()) {
            (1, Some(value)) => Ok(*value),
            (remaining, _) => Err(EvalError::MalformedExpression { remaining }),
        }
    }
}
