pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::error::{ArithmeticError, ParseError, TokenizeError};
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;
use syntax::expression_tree::Node;

/// Splits the given expression into tokens.
///
/// # Examples
///
/// ```
/// use logic_calculator::interpreter::tokenize;
///
/// assert!(tokenize("1 + @").is_err());
/// assert_eq!(tokenize("1 <-> 2").unwrap().len(), 3);
/// ```
pub fn tokenize(expression: &str) -> std::result::Result<Vec<Token>, TokenizeError> {
    lexer::tokenize(expression)
}

/// Converts the given input string into an equivalent expression tree,
/// which is easier to evaluate and print than the original string.
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
/// use logic_calculator::interpreter::{build, render_postfix};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = build("1+2")?;
/// assert_eq!(render_postfix(&tree), "1 2 + ");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn build(expression: &str) -> std::result::Result<Node, ParseError> {
    parser::parse(expression)
}

/// Computes the integer value of the given expression tree.
pub fn evaluate(tree: &Node) -> std::result::Result<i64, ArithmeticError> {
    evaluator::evaluate(tree)
}

/// Renders the tree in infix notation with every operand parenthesized, e.g. `(1)+(2)`.
pub fn render_infix(tree: &Node) -> String {
    tree.to_infix()
}

/// Renders the tree in reverse polish notation, e.g. `1 2 + `.
pub fn render_postfix(tree: &Node) -> String {
    tree.to_postfix()
}

/// Builds and evaluates the given expression.
///
/// The typed failure can be recovered from the returned error with
/// [`anyhow::Error::downcast_ref`], as either a [`ParseError`] or an [`ArithmeticError`].
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use logic_calculator::interpreter::calculate;
/// use logic_calculator::interpreter::error::ArithmeticError;
///
/// assert_eq!(calculate("(1 + 2) * 3").unwrap(), 9);
///
/// let error = calculate("1 / 0").unwrap_err();
/// assert!(error.downcast_ref::<ArithmeticError>().is_some());
/// ```
pub fn calculate(expression: &str) -> Result<i64> {
    let tree = build(expression)
        .with_context(|| format!("Could not build expression '{}'", expression))?;
    let value = evaluate(&tree)
        .with_context(|| format!("Could not evaluate expression '{}'", expression))?;
    debug!("{} = {}", expression, value);
    Ok(value)
}

/// Lists the given tokens by name and value, e.g. `LIT(1) PLUS(0) LIT(2)`.
///
/// # Examples
///
/// ```
/// use logic_calculator::interpreter::{tokenize, tokens_to_string};
///
/// let tokens = tokenize("-1 -> 2").unwrap();
/// assert_eq!(tokens_to_string(&tokens), "NEG(0) LIT(1) IMPLICATION(0) LIT(2)");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{:?}", token)).join(" ")
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    #[parameterized(
    literal = { 0, 1, 7, 1234567890, 9223372036854775807 }
    )]
    fn literal_evaluates_to_itself(literal: i64) {
        let tree = build(&literal.to_string()).unwrap();

        pretty_assertions::assert_eq!(evaluate(&tree).unwrap(), literal);
    }

    #[test]
    fn simple_expression_renders_in_postfix() {
        let tree = build("1+2").unwrap();

        assert_eq!(render_postfix(&tree), "1 2 + ");
    }

    #[test]
    fn complex_expression_renders_in_both_notations() {
        let tree = build("-3 + 4! * (2 - 1) -> ~0").unwrap();

        assert_eq!(
            render_infix(&tree),
            "((-(3))+((!(4))*((2)-(1))))->(~(0))"
        );
        assert_eq!(render_postfix(&tree), "3 - 4 ! 2 1 - * + 0 ~ -> ");
    }

    #[test]
    fn redundant_parentheses_do_not_change_the_tree() {
        let plain = build("1 + 2 * 3").unwrap();
        let redundant = build("((1) + ((2) * 3))").unwrap();

        assert_eq!(plain, redundant);
    }

    #[test]
    fn whitespace_is_ignored() {
        let compact = build("1<->2&&3").unwrap();
        let spaced = build(" 1 <->\t2 &&\n3 ").unwrap();

        assert_eq!(compact, spaced);
    }

    #[test]
    fn minus_after_unary_operator_is_subtraction() {
        assert!(matches!(
            build("~-1"),
            Err(ParseError::MissingOperand { .. })
        ));
        assert!(matches!(
            build("--1"),
            Err(ParseError::MissingOperand { .. })
        ));
        assert_eq!(calculate("3!-1").unwrap(), 5);
    }

    #[test]
    fn stacked_prefix_operators_after_binary_operator_apply_to_both_operands() {
        let tree = build("2*~~1").unwrap();

        assert_eq!(render_infix(&tree), "(~(2))*(~(1))");
        assert_eq!(evaluate(&tree).unwrap(), 0);
    }

    #[test]
    fn misplaced_operators_and_operands_are_rejected() {
        for expression in ["+ 1 2", "1 2 +", "1()", "1 ~", "!3", "(1 +)"] {
            assert!(build(expression).is_err(), "{} should not build", expression);
        }
    }

    #[test]
    fn deeply_nested_expression_is_rejected() {
        let expression = format!("{}1", "~".repeat(100_000));

        let error = calculate(&expression).unwrap_err();

        assert_eq!(
            error.downcast_ref::<ParseError>(),
            Some(&ParseError::TooDeep {
                limit: parser::MAXIMUM_DEPTH
            })
        );
    }

    #[test]
    fn deepest_allowed_expression_evaluates_and_renders() {
        let expression = format!("{}1", "~".repeat(parser::MAXIMUM_DEPTH - 1));
        let tree = build(&expression).unwrap();

        assert_eq!(evaluate(&tree).unwrap(), 0);
        assert!(render_infix(&tree).starts_with("~(~(~("));
        assert!(render_postfix(&tree).starts_with("1 ~ ~ ~ "));
    }

    #[test]
    fn calculate_returns_value() {
        assert_eq!(calculate("8-3-2").unwrap(), 3);
        assert_eq!(calculate("3- -2").unwrap(), 5);
        assert_eq!(calculate("1<->1").unwrap(), 1);
    }

    #[test]
    fn calculate_keeps_typed_errors() {
        let parse_error = calculate("(1+2").unwrap_err();
        assert_eq!(
            parse_error.downcast_ref::<ParseError>(),
            Some(&ParseError::UnmatchedOpeningParenthesis)
        );

        let tokenize_error = calculate("1+@").unwrap_err();
        assert!(matches!(
            tokenize_error.downcast_ref::<ParseError>(),
            Some(ParseError::Tokenize(_))
        ));

        let arithmetic_error = calculate("1/0").unwrap_err();
        assert_eq!(
            arithmetic_error.downcast_ref::<ArithmeticError>(),
            Some(&ArithmeticError::DivisionByZero { dividend: 1 })
        );
    }

    #[test]
    fn calculate_error_message_names_the_expression() {
        let error = calculate("1/0").unwrap_err();

        assert_eq!(
            format!("{:#}", error),
            "Could not evaluate expression '1/0': Division by zero in 1 / 0"
        );
    }

    #[test]
    fn tokens_are_listed_by_name() {
        let tokens = tokenize("(1 % 2)").unwrap();

        assert_eq!(
            tokens_to_string(&tokens),
            "OPEN(0) LIT(1) MOD(0) LIT(2) CLOSE(0)"
        );
    }
}
