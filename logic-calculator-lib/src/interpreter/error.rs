use crate::interpreter::operator::Operator;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// The input text contains something that is not part of the expression language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// No lexeme or literal starts at this byte offset.
    UnrecognizedInput { position: usize, character: char },
    /// A run of digits that does not fit in a signed 64-bit integer.
    LiteralOutOfRange { position: usize, literal: String },
}

/// The tokens do not form a single well-formed expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Tokenize(TokenizeError),
    /// An operator was reduced while too few operands were available.
    MissingOperand { operator: Operator },
    /// More than one operand was left once every operator had been reduced.
    MissingOperator { operands: usize },
    UnmatchedOpeningParenthesis,
    UnmatchedClosingParenthesis,
    EmptyExpression,
    /// A control token that should never leave the lexer.
    UnexpectedToken { token: Token },
    /// The tree would nest deeper than `limit` levels.
    TooDeep { limit: usize },
}

/// Evaluating a well-formed tree failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    DivisionByZero { dividend: i64 },
    ModuloByZero { dividend: i64 },
    /// Factorial is only defined for non-negative operands.
    NegativeFactorial { operand: i64 },
    /// The result does not fit in a signed 64-bit integer.
    Overflow { expression: String },
}

impl ArithmeticError {
    pub(crate) fn overflow(expression: String) -> ArithmeticError {
        ArithmeticError::Overflow { expression }
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedInput {
                position,
                character,
            } => write!(f, "Unrecognized character '{character}' at position {position}"),
            Self::LiteralOutOfRange { position, literal } => write!(
                f,
                "Literal {literal} at position {position} does not fit in a 64-bit integer"
            ),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokenize(error) => write!(f, "Tokenization error: {error}"),
            Self::MissingOperand { operator } => write!(
                f,
                "Operator '{operator}' expects {} operand(s) but not enough were found",
                operator.arity()
            ),
            Self::MissingOperator { operands } => {
                write!(f, "{operands} operands are not joined by any operator")
            }
            Self::UnmatchedOpeningParenthesis => {
                write!(f, "Expected closing parenthesis ')' but none found")
            }
            Self::UnmatchedClosingParenthesis => {
                write!(f, "Found closing parenthesis ')' without a matching '('")
            }
            Self::EmptyExpression => write!(f, "The expression is empty"),
            Self::UnexpectedToken { token } => write!(f, "Unexpected token {token:?}"),
            Self::TooDeep { limit } => {
                write!(f, "The expression nests deeper than {limit} levels")
            }
        }
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => write!(f, "Division by zero in {dividend} / 0"),
            Self::ModuloByZero { dividend } => write!(f, "Modulo by zero in {dividend} % 0"),
            Self::NegativeFactorial { operand } => {
                write!(f, "Factorial is not defined for negative operand {operand}")
            }
            Self::Overflow { expression } => {
                write!(f, "Integer overflow while computing {expression}")
            }
        }
    }
}

impl std::error::Error for TokenizeError {}

impl std::error::Error for ParseError {}

impl std::error::Error for ArithmeticError {}

impl From<TokenizeError> for ParseError {
    fn from(error: TokenizeError) -> Self {
        ParseError::Tokenize(error)
    }
}
