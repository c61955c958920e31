mod expression_builder;

pub use crate::interpreter::parser::expression_builder::{build_tree, MAXIMUM_DEPTH};
use crate::interpreter::error::ParseError;
use crate::interpreter::lexer;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::tokens_to_string;
use log::debug;

/// Parses the given input string into an equivalent expression tree.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use logic_calculator::interpreter::parser::parse;
///
/// let tree = parse("(1 + 2) * 3").unwrap();
/// assert_eq!(tree.to_infix(), "((1)+(2))*(3)");
/// ```
pub fn parse(expression: &str) -> Result<Node, ParseError> {
    let infix_tokens = lexer::tokenize(expression)?;
    debug!("Tokens: {}", tokens_to_string(&infix_tokens));
    let tree = build_tree(infix_tokens)?;
    debug!("Expression tree: {}", tree.to_infix());
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::error::TokenizeError;

    #[test]
    fn tokenization_error_is_wrapped() {
        let error = parse("1+@").unwrap_err();

        assert_eq!(
            error,
            ParseError::Tokenize(TokenizeError::UnrecognizedInput {
                position: 2,
                character: '@'
            })
        )
    }

    #[test]
    fn unmatched_parenthesis_returns_err() {
        assert_eq!(
            parse("(1+2").unwrap_err(),
            ParseError::UnmatchedOpeningParenthesis
        );
        assert_eq!(
            parse("1+2)").unwrap_err(),
            ParseError::UnmatchedClosingParenthesis
        );
    }

    #[test]
    fn blank_expression_returns_err() {
        assert_eq!(parse("   ").unwrap_err(), ParseError::EmptyExpression);
    }
}
