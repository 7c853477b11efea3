use crate::interpreter::lexer::Token;

/// An ordered sequence of tokens in postfix (Reverse Polish) order.
///
/// Produced by [`crate::interpreter::parser::core::parse`] and consumed once,
/// left to right, by the evaluator. A postfix sequence never contains
/// parentheses.
pub type Postfix = Vec<Token>;

/// The eight operators understood by the calculator.
///
/// Every operator except [`Operator::Fact`] is binary. `Fact` is a postfix
/// unary operator: in `5 !` it consumes the single operand to its left.
///
/// For [`Operator::Root`] the left operand is the *degree* and the right
/// operand is the *radicand*, so `2 √ 25` is the square root of 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `√`
    Root,
    /// `!`
    Fact,
}

impl Operator {
    /// All operators, in display order.
    pub const ALL: [Self; 8] = [Self::Add,
                                Self::Sub,
                                Self::Mul,
                                Self::Div,
                                Self::Mod,
                                Self::Pow,
                                Self::Root,
                                Self::Fact];

    /// Returns the binding strength of the operator.
    ///
    /// Higher binds tighter. Operators of equal precedence associate to the
    /// left.
    ///
    /// | Operators          | Precedence |
    /// |--------------------|------------|
    /// | `+` `-`            | 1          |
    /// | `*` `/` `%`        | 2          |
    /// | `^` `√` `!`        | 3          |
    ///
    /// # Example
    /// ```
    /// use redcalc::ast::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Root.precedence(), Operator::Fact.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Pow | Self::Root | Self::Fact => 3,
        }
    }

    /// Returns `true` for the postfix factorial, the only operator that takes
    /// one operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Fact)
    }

    /// The character that denotes the operator in input text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Pow => '^',
            Self::Root => '√',
            Self::Fact => '!',
        }
    }

    /// Looks up the operator denoted by `symbol`.
    ///
    /// # Example
    /// ```
    /// use redcalc::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('√'), Some(Operator::Root));
    /// assert_eq!(Operator::from_symbol('('), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
