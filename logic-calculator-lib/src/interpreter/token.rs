use crate::interpreter::operator::{BinaryOperator, Operator, UnaryOperator};
use std::fmt;
use std::fmt::Formatter;

/// The kind of a discrete part of an expression.
///
/// The declaration order of the scannable kinds matters: the lexer tries their lexemes
/// in this order, so a lexeme must come before every shorter lexeme that is its prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Binary operators
    Biconditional,
    Implication,
    Or,
    And,
    Plus,
    Minus,
    Asterisk,
    ForwardSlash,
    Percent,

    // Unary operators
    Tilde,
    Exclamation,

    // Brackets
    LeftParentheses,
    RightParentheses,

    // Not produced by matching a lexeme
    Literal,
    Negate,

    End,
    Error,
}

/// Kinds that are recognized by matching their lexeme, in scanning order.
pub static SCANNED_KINDS: [TokenKind; 13] = [
    TokenKind::Biconditional,
    TokenKind::Implication,
    TokenKind::Or,
    TokenKind::And,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Asterisk,
    TokenKind::ForwardSlash,
    TokenKind::Percent,
    TokenKind::Tilde,
    TokenKind::Exclamation,
    TokenKind::LeftParentheses,
    TokenKind::RightParentheses,
];

impl TokenKind {
    /// The text this kind is written as, if it has a fixed one.
    pub fn lexeme(&self) -> Option<&'static str> {
        match self {
            TokenKind::Biconditional => Some("<->"),
            TokenKind::Implication => Some("->"),
            TokenKind::Or => Some("||"),
            TokenKind::And => Some("&&"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus | TokenKind::Negate => Some("-"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::ForwardSlash => Some("/"),
            TokenKind::Percent => Some("%"),
            TokenKind::Tilde => Some("~"),
            TokenKind::Exclamation => Some("!"),
            TokenKind::LeftParentheses => Some("("),
            TokenKind::RightParentheses => Some(")"),
            TokenKind::Literal | TokenKind::End | TokenKind::Error => None,
        }
    }

    /// Short upper-case name, used when listing tokens.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Biconditional => "BICONDITION",
            TokenKind::Implication => "IMPLICATION",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "MUL",
            TokenKind::ForwardSlash => "DIV",
            TokenKind::Percent => "MOD",
            TokenKind::Tilde => "NEGL",
            TokenKind::Exclamation => "FACT",
            TokenKind::LeftParentheses => "OPEN",
            TokenKind::RightParentheses => "CLOSE",
            TokenKind::Literal => "LIT",
            TokenKind::Negate => "NEG",
            TokenKind::End => "END",
            TokenKind::Error => "ERROR",
        }
    }

    pub fn binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            TokenKind::Biconditional => Some(BinaryOperator::Biconditional),
            TokenKind::Implication => Some(BinaryOperator::Implication),
            TokenKind::Or => Some(BinaryOperator::Or),
            TokenKind::And => Some(BinaryOperator::And),
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Subtract),
            TokenKind::Asterisk => Some(BinaryOperator::Multiply),
            TokenKind::ForwardSlash => Some(BinaryOperator::Divide),
            TokenKind::Percent => Some(BinaryOperator::Modulo),
            _ => None,
        }
    }

    pub fn unary_operator(&self) -> Option<UnaryOperator> {
        match self {
            TokenKind::Negate => Some(UnaryOperator::Negate),
            TokenKind::Tilde => Some(UnaryOperator::LogicalNot),
            TokenKind::Exclamation => Some(UnaryOperator::Factorial),
            _ => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        self.binary_operator()
            .map(Operator::Binary)
            .or_else(|| self.unary_operator().map(Operator::Unary))
    }

    pub fn is_binary_operator(&self) -> bool {
        self.binary_operator().is_some()
    }
}

/// A discrete part of an expression.
///
/// `value` only carries meaning for [`TokenKind::Literal`] tokens and is zero otherwise.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: i64,
}

impl Token {
    pub fn new(kind: TokenKind) -> Token {
        Token { kind, value: 0 }
    }

    pub fn literal(value: i64) -> Token {
        Token {
            kind: TokenKind::Literal,
            value,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind.lexeme() {
            Some(lexeme) => write!(f, "{}", lexeme),
            None if self.kind == TokenKind::Literal => write!(f, "{}", self.value),
            None => write!(f, "<{}>", self.kind.name()),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.name(), self.value)
    }
}
