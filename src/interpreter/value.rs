/// The `Number` result type and its normalization.
pub mod core;
