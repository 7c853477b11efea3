/// Binary operator evaluation logic.
///
/// Implements the arithmetic primitives that take two operands: the four
/// basic operations, modulo, power and root.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the postfix factorial.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluation entry point and the result type shared by the
/// evaluator.
pub mod core;

/// The operand stack.
///
/// Holds intermediate values, including the implicit `0` left operand, and
/// applies operators to them.
pub mod stack;
