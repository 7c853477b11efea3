/// Operator dispatch for binary operators.
pub mod core;
/// Addition, subtraction, multiplication, division and modulo.
pub mod scalar;
/// Power and root.
pub mod power;

pub use power::{pow, root};
pub use scalar::{add, div, modulo, mul, sub};
