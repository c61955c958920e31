use crate::interpreter::error::ArithmeticError;
use crate::interpreter::syntax::expression_tree::Node;

/// Computes the integer value of the given expression tree.
///
/// Both operands of a binary operation are always evaluated, left first, even for the
/// logical operators. Overflow is reported as an error rather than wrapped.
///
/// # Arguments
///
/// * `node`: The root of the expression tree to evaluate.
///
/// returns: The value of the expression, or the first arithmetic failure encountered.
///
/// # Examples
///
/// ```
/// use logic_calculator::interpreter::evaluator::evaluate;
/// use logic_calculator::interpreter::parser::parse;
///
/// let tree = parse("1 + 2 * 3").unwrap();
/// assert_eq!(evaluate(&tree), Ok(7));
/// ```
pub fn evaluate(node: &Node) -> Result<i64, ArithmeticError> {
    match node {
        Node::Literal(value) => Ok(*value),
        Node::UnaryOperation { operator, operand } => {
            let value = evaluate(operand)?;
            operator.evaluate(value)
        }
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let left = evaluate(left_operand)?;
            let right = evaluate(right_operand)?;
            operator.evaluate(left, right)
        }
    }
}
