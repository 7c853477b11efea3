use crate::{
    ast::Operator,
    interpreter::evaluator::{
        binary::{add, div, modulo, mul, pow, root, sub},
        core::EvalResult,
    },
};

/// Evaluates `left OP right` for a binary operator.
///
/// For [`Operator::Root`] the left operand is the degree and the right
/// operand the radicand, so this computes `root(right, left)`.
///
/// Only called by the operand stack, which routes [`Operator::Fact`] to
/// [`crate::interpreter::evaluator::unary::factorial`] instead.
pub(crate) fn eval_binary(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(add(left, right)),
        Operator::Sub => Ok(sub(left, right)),
        Operator::Mul => Ok(mul(left, right)),
        Operator::Div => div(left, right),
        Operator::Mod => modulo(left, right),
        Operator::Pow => pow(left, right),
        Operator::Root => root(right, left),
        Operator::Fact => unreachable!("factorial is a unary operator"),
    }
}
