/// Parser entry point.
///
/// Splits the input into words, classifies them and drives the shunting-yard
/// conversion.
pub mod core;

/// The shunting-yard operator stack.
///
/// Holds pending operators and open parentheses, and decides when an operator
/// moves to the output.
pub mod shunting;
