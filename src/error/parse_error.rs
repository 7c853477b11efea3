use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while lexing or parsing.
///
/// Positions count whitespace-separated words from zero, so `position: 2` in
/// `"1 + x"` points at `x`.
pub enum ParseError {
    /// A word is neither an operator, a parenthesis, nor a number.
    #[error("Error at token {position}: '{token}' is not a number or an operator.")]
    MalformedToken {
        /// The offending word.
        token:    String,
        /// Index of the word in the input.
        position: usize,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("Error at token {position}: Unbalanced parenthesis.")]
    UnbalancedParenthesis {
        /// Index of the unmatched parenthesis.
        position: usize,
    },
}
