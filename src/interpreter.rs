/// The evaluator module reduces a postfix sequence to a number.
///
/// The evaluator walks the postfix sequence with an operand stack, applies
/// the arithmetic primitives, and reports stack and domain errors. It is the
/// execution engine behind [`crate::evaluate`].
///
/// # Responsibilities
/// - Maintains the operand stack and its implicit `0` left operand.
/// - Applies binary operators and the postfix factorial.
/// - Reports division by zero, invalid exponents, and invalid factorials.
pub mod evaluator;
/// The lexer module classifies words of the input.
///
/// The input is split on whitespace and each word is matched against the
/// token grammar: a number, one of the eight operator symbols, or a
/// parenthesis. A word that is none of these is rejected.
pub mod lexer;
/// The parser module reorders tokens from infix to postfix.
///
/// The parser implements the shunting-yard algorithm over the operator
/// precedence table of [`crate::ast::Operator`].
///
/// # Responsibilities
/// - Converts the token stream into postfix order.
/// - Validates parenthesis balance, reporting the offending position.
pub mod parser;
/// The value module defines the number returned to callers.
///
/// All arithmetic runs on `f64`; results are normalized once, at the output
/// boundary, into an integer when they have no fractional part.
pub mod value;
