use crate::interpreter::error::ParseError;
use crate::interpreter::operator::Operator;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::{Token, TokenKind};
use log::trace;

/// The deepest tree the builder will produce, counting a lone literal as one level.
///
/// Every walk over a tree recurses once per level, so deeper input is rejected while
/// building instead of exhausting the stack later.
pub const MAXIMUM_DEPTH: usize = 512;

/// Builds an expression tree from tokens in infix order, using the shunting-yard algorithm.
///
/// Operators of equal precedence are reduced from left to right.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens of the expression, as produced by the lexer.
///
/// returns: The root of the expression tree.
pub fn build_tree(infix_tokens: Vec<Token>) -> Result<Node, ParseError> {
    let mut operands: Vec<Node> = Vec::new();
    let mut operators: Vec<Token> = Vec::new();
    // Whether the next token has to start an operand, as opposed to following one.
    let mut expect_operand = true;

    for token in infix_tokens {
        match token.kind {
            TokenKind::Literal | TokenKind::LeftParentheses | TokenKind::Tilde | TokenKind::Negate
                if !expect_operand =>
            {
                return Err(ParseError::MissingOperator {
                    operands: operands.len() + 1,
                })
            }
            TokenKind::RightParentheses if expect_operand => {
                return Err(missing_operand_before_closing_parenthesis(&operators))
            }
            TokenKind::Literal => {
                operands.push(Node::new_literal(token.value));
                expect_operand = false;
            }
            TokenKind::LeftParentheses => operators.push(token),
            TokenKind::RightParentheses => {
                parse_closing_parenthesis_token(&mut operators, &mut operands)?
            }
            TokenKind::Tilde | TokenKind::Negate => {
                parse_operator_token(&mut operators, &mut operands, token)?
            }
            TokenKind::Biconditional
            | TokenKind::Implication
            | TokenKind::Or
            | TokenKind::And
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::ForwardSlash
            | TokenKind::Percent
            | TokenKind::Exclamation => {
                if expect_operand {
                    return Err(missing_operand(token));
                }
                parse_operator_token(&mut operators, &mut operands, token)?;
                // Factorial is postfix, so an operand has just been completed.
                expect_operand = token.kind != TokenKind::Exclamation;
            }
            TokenKind::End | TokenKind::Error => return Err(ParseError::UnexpectedToken { token }),
        }
    }

    reduce_leftover_operators(&mut operators, &mut operands)?;

    let root = operands.pop().ok_or(ParseError::EmptyExpression)?;
    if !operands.is_empty() {
        return Err(ParseError::MissingOperator {
            operands: operands.len() + 1,
        });
    }
    Ok(root)
}

fn missing_operand(token: Token) -> ParseError {
    match token.kind.operator() {
        Some(operator) => ParseError::MissingOperand { operator },
        None => ParseError::UnexpectedToken { token },
    }
}

fn missing_operand_before_closing_parenthesis(operators: &[Token]) -> ParseError {
    match operators.last() {
        None => ParseError::UnmatchedClosingParenthesis,
        Some(&top) if top.kind == TokenKind::LeftParentheses => ParseError::EmptyExpression,
        Some(&top) => missing_operand(top),
    }
}

fn reduce_leftover_operators(
    operators: &mut Vec<Token>,
    operands: &mut Vec<Node>,
) -> Result<(), ParseError> {
    while let Some(token) = operators.pop() {
        match token.kind.operator() {
            Some(operator) => reduce(operator, operands)?,
            None if token.kind == TokenKind::LeftParentheses => {
                return Err(ParseError::UnmatchedOpeningParenthesis)
            }
            None => return Err(ParseError::UnexpectedToken { token }),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    operands: &mut Vec<Node>,
) -> Result<(), ParseError> {
    loop {
        let token = operators
            .pop()
            .ok_or(ParseError::UnmatchedClosingParenthesis)?;
        match token.kind.operator() {
            Some(operator) => reduce(operator, operands)?,
            // Discard the open parenthesis.
            None if token.kind == TokenKind::LeftParentheses => return Ok(()),
            None => return Err(ParseError::UnexpectedToken { token }),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    operands: &mut Vec<Node>,
    token: Token,
) -> Result<(), ParseError> {
    let operator = token
        .kind
        .operator()
        .ok_or(ParseError::UnexpectedToken { token })?;

    while !operands.is_empty() {
        let other_operator = match operators.last().and_then(|top| top.kind.operator()) {
            // An empty stack or an open parenthesis stops the reduction.
            None => break,
            Some(other_operator) => other_operator,
        };
        if !other_operator.precedence_ge(&operator) {
            break;
        }

        operators.pop(); // Pop other_operator
        reduce(other_operator, operands)?;
    }

    operators.push(token);
    Ok(())
}

/// Replaces the topmost operands with a node applying `operator` to them.
///
/// The right operand of a binary operator is the one on top of the stack.
fn reduce(operator: Operator, operands: &mut Vec<Node>) -> Result<(), ParseError> {
    let missing_operand = ParseError::MissingOperand { operator };
    let node = match operator {
        Operator::Unary(unary_operator) => {
            let operand = operands.pop().ok_or(missing_operand)?;
            Node::new_unary_operation(unary_operator, operand)
        }
        Operator::Binary(binary_operator) => {
            let right_operand = operands.pop().ok_or_else(|| missing_operand.clone())?;
            let left_operand = operands.pop().ok_or(missing_operand)?;
            Node::new_binary_operation(binary_operator, left_operand, right_operand)
        }
    };
    if node.depth() > MAXIMUM_DEPTH {
        return Err(ParseError::TooDeep {
            limit: MAXIMUM_DEPTH,
        });
    }
    trace!("Reduced {:?} with {} operand(s) left", operator, operands.len());
    operands.push(node);
    Ok(())
}
