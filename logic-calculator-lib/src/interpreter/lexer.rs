use crate::interpreter::error::TokenizeError;
use crate::interpreter::token::{Token, TokenKind, SCANNED_KINDS};
use log::trace;

static SEPARATORS: [char; 3] = [' ', '\t', '\n'];

/// Splits the given expression into tokens.
///
/// A `-` is read as a negation instead of a subtraction when it is the first token,
/// or when it directly follows an opening parenthesis or a binary operator.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use logic_calculator::interpreter::lexer::tokenize;
/// use logic_calculator::interpreter::token::{Token, TokenKind};
///
/// let tokens = tokenize("-1 + 2").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::new(TokenKind::Negate),
///         Token::literal(1),
///         Token::new(TokenKind::Plus),
///         Token::literal(2),
///     ]
/// );
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut scanner = Scanner::new(expression);
    let mut tokens: Vec<Token> = Vec::new();

    loop {
        let mut token = scanner.next_token()?;
        match token.kind {
            TokenKind::End => break,
            TokenKind::Minus if is_negation_position(tokens.last()) => {
                token.kind = TokenKind::Negate
            }
            _ => {}
        }
        trace!("Scanned {:?}", token);
        tokens.push(token);
    }

    Ok(tokens)
}

fn is_negation_position(previous: Option<&Token>) -> bool {
    match previous {
        None => true,
        Some(token) => {
            token.kind == TokenKind::LeftParentheses || token.kind.is_binary_operator()
        }
    }
}

struct Scanner<'a> {
    expression: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(expression: &'a str) -> Self {
        Scanner {
            expression,
            position: 0,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.expression[self.position..]
    }

    fn skip_separators(&mut self) {
        let remaining = self.remaining();
        let trimmed = remaining.trim_start_matches(&SEPARATORS[..]);
        self.position += remaining.len() - trimmed.len();
    }

    /// Yields the next token, or an `End` token once the input is exhausted.
    fn next_token(&mut self) -> Result<Token, TokenizeError> {
        self.skip_separators();
        let remaining = self.remaining();

        if remaining.is_empty() {
            return Ok(Token::new(TokenKind::End));
        }

        let matched_kind = SCANNED_KINDS.iter().find_map(|kind| {
            kind.lexeme()
                .filter(|lexeme| remaining.starts_with(*lexeme))
                .map(|lexeme| (*kind, lexeme.len()))
        });
        if let Some((kind, length)) = matched_kind {
            self.position += length;
            return Ok(Token::new(kind));
        }

        let digits = remaining
            .find(|character: char| !character.is_ascii_digit())
            .unwrap_or(remaining.len());
        if digits > 0 {
            let literal = &remaining[..digits];
            let value = literal
                .parse::<i64>()
                .map_err(|_| TokenizeError::LiteralOutOfRange {
                    position: self.position,
                    literal: literal.to_string(),
                })?;
            self.position += digits;
            return Ok(Token::literal(value));
        }

        // Only reached when `remaining` is non-empty.
        let character = remaining.chars().next().unwrap_or_default();
        Err(TokenizeError::UnrecognizedInput {
            position: self.position,
            character,
        })
    }
}
