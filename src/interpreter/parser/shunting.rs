use crate::{
    ast::{Operator, Postfix},
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// An entry waiting on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// An open parenthesis and the position of its word.
    Group { position: usize },
    Operator(Operator),
}

/// The auxiliary stack of the shunting-yard algorithm.
///
/// Only operators and open parentheses are ever pushed here; numbers go
/// straight to the output.
#[derive(Debug, Default)]
pub struct OperatorStack {
    entries: Vec<Pending>,
}

impl OperatorStack {
    /// Creates an empty operator stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Pushes an open parenthesis found at `position`.
    pub fn open_group(&mut self, position: usize) {
        self.entries.push(Pending::Group { position });
    }

    /// Pushes `incoming`, first moving to `output` every pending operator that
    /// binds at least as tightly.
    ///
    /// Popping stops at an open parenthesis or at an operator of strictly
    /// lower precedence.
    pub fn push_operator(&mut self, incoming: Operator, output: &mut Postfix) {
        while let Some(Pending::Operator(top)) = self.entries.last()
              && top.precedence() >= incoming.precedence()
        {
            output.push(Token::Operator(*top));
            self.entries.pop();
        }

        self.entries.push(Pending::Operator(incoming));
    }

    /// Handles a `)` found at `position`.
    ///
    /// Moves pending operators to `output` until the matching `(` is found;
    /// the parenthesis itself is discarded.
    ///
    /// # Errors
    /// Returns [`ParseError::UnbalancedParenthesis`] if the stack empties
    /// without finding a `(`.
    pub fn close_group(&mut self, position: usize, output: &mut Postfix) -> ParseResult<()> {
        loop {
            match self.entries.pop() {
                Some(Pending::Group { .. }) => return Ok(()),
                Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
                None => return Err(ParseError::UnbalancedParenthesis { position }),
            }
        }
    }

    /// Moves every remaining operator to `output` once the input is consumed.
    ///
    /// # Errors
    /// Returns [`ParseError::UnbalancedParenthesis`] pointing at the innermost
    /// `(` that was never closed.
    pub fn drain_into(mut self, output: &mut Postfix) -> ParseResult<()> {
        while let Some(entry) = self.entries.pop() {
            match entry {
                Pending::Group { position } => {
                    return Err(ParseError::UnbalancedParenthesis { position });
                },
                Pending::Operator(op) => output.push(Token::Operator(op)),
            }
        }

        Ok(())
    }
}
