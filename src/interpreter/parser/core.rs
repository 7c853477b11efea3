use tracing::debug;

use crate::{
    ast::Postfix,
    error::ParseError,
    interpreter::{
        lexer::{Token, lex_word},
        parser::shunting::OperatorStack,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Converts an infix expression into postfix order.
///
/// The input is split on whitespace; each word must be a number, an operator
/// symbol, `(` or `)`. Operators are reordered with the shunting-yard
/// algorithm: an incoming operator first moves every pending operator of
/// greater or equal precedence to the output, so operators of one tier
/// associate to the left.
///
/// No semantic validation happens here. `"1 + + 2"` parses; the missing
/// operand is reported by the evaluator.
///
/// Parsing is pure: the same text always yields the same sequence.
///
/// # Errors
/// - [`ParseError::MalformedToken`] for a word that is not a token.
/// - [`ParseError::UnbalancedParenthesis`] for a `)` with no open `(`, or a
///   `(` still open at the end of the input.
///
/// # Example
/// ```
/// use redcalc::{
///     ast::Operator,
///     interpreter::{lexer::Token, parser::core::parse},
/// };
///
/// let postfix = parse("2 * ( 3 + 4 )").unwrap();
/// assert_eq!(postfix,
///            vec![Token::Number(2.0),
///                 Token::Number(3.0),
///                 Token::Number(4.0),
///                 Token::Operator(Operator::Add),
///                 Token::Operator(Operator::Mul)]);
/// ```
pub fn parse(text: &str) -> ParseResult<Postfix> {
    let mut output = Postfix::new();
    let mut pending = OperatorStack::new();

    for (position, word) in text.split_whitespace().enumerate() {
        match lex_word(word, position)? {
            Token::RightParen => pending.close_group(position, &mut output)?,
            Token::LeftParen => pending.open_group(position),
            Token::Operator(op) => pending.push_operator(op, &mut output),
            number @ Token::Number(_) => output.push(number),
        }
    }

    pending.drain_into(&mut output)?;

    debug!(input = text,
           postfix = %format_postfix(&output),
           "converted to postfix");

    Ok(output)
}

/// Renders a postfix sequence as space-separated tokens.
///
/// # Example
/// ```
/// use redcalc::interpreter::parser::core::{format_postfix, parse};
///
/// let postfix = parse("8 - 3 - 2").unwrap();
/// assert_eq!(format_postfix(&postfix), "8 3 - 2 -");
/// ```
#[must_use]
pub fn format_postfix(postfix: &[Token]) -> String {
    postfix.iter()
           .map(ToString::to_string)
           .collect::<Vec<_>>()
           .join(" ")
}
