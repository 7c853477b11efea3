use logos::Logos;

use crate::{ast::Operator, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token of a calculator expression.
///
/// Tokens are separated by whitespace in the input, so the lexer only ever
/// runs over a single word at a time (see [`lex_word`]).
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `-2`, `3.14`, `.5` or `2e10`.
    #[regex(r"[+-]?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// One of the eight operator symbols.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("%", |_| Operator::Mod)]
    #[token("^", |_| Operator::Pow)]
    #[token("√", |_| Operator::Root)]
    #[token("!", |_| Operator::Fact)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Classifies one whitespace-delimited word.
///
/// The whole word must form exactly one token: `"(3"` or `"1.2.3"` are
/// rejected even though they start with a valid token.
///
/// # Errors
/// Returns [`ParseError::MalformedToken`] if the word is not a single number,
/// operator or parenthesis.
///
/// # Example
/// ```
/// use redcalc::{
///     ast::Operator,
///     interpreter::lexer::{Token, lex_word},
/// };
///
/// assert_eq!(lex_word("-2.5", 0).unwrap(), Token::Number(-2.5));
/// assert_eq!(lex_word("√", 1).unwrap(), Token::Operator(Operator::Root));
/// assert!(lex_word("2+3", 2).is_err());
/// ```
pub fn lex_word(word: &str, position: usize) -> ParseResult<Token> {
    let mut lexer = Token::lexer(word);

    match lexer.next() {
        Some(Ok(token)) if lexer.span().end == word.len() => Ok(token),
        _ => Err(ParseError::MalformedToken { token: word.to_string(),
                                              position }),
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
