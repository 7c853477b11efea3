/// Floating-point helpers.
///
/// Every operand is an `f64`. These helpers answer the integer questions the
/// calculator asks of a float (is it whole, does it fit an `i64`) in one
/// place, without silent truncation.
pub mod num;
