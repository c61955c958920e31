use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_unary_operation, SyntaxVisitor,
};

/// Writes a tree as infix text where every operand is wrapped in parentheses,
/// e.g. `(1)+((2)*(3))`.
#[derive(Default)]
pub(crate) struct InfixRenderer {
    output: String,
}

impl InfixRenderer {
    pub(crate) fn into_output(self) -> String {
        self.output
    }

    fn parenthesized(&mut self, operand: &Node) {
        self.output.push('(');
        operand.accept(self);
        self.output.push(')');
    }
}

impl SyntaxVisitor for InfixRenderer {
    fn visit_literal(&mut self, value: i64) {
        self.output.push_str(&value.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.parenthesized(left_operand);
        self.output.push_str(operator.symbol());
        self.parenthesized(right_operand);
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.output.push_str(operator.symbol());
        self.parenthesized(operand);
    }
}

/// Writes a tree in reverse polish notation, e.g. `1 2 3 * + `.
#[derive(Default)]
pub(crate) struct PostfixRenderer {
    output: String,
}

impl PostfixRenderer {
    pub(crate) fn into_output(self) -> String {
        self.output
    }

    fn push_token(&mut self, token: &str) {
        self.output.push_str(token);
        self.output.push(' ');
    }
}

impl SyntaxVisitor for PostfixRenderer {
    fn visit_literal(&mut self, value: i64) {
        self.push_token(&value.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand);
        self.push_token(operator.symbol());
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        walk_unary_operation(self, operand);
        self.push_token(operator.symbol());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    fn logical_tree() -> Node {
        // ~1 -> (0 <-> 2 && 3)
        let not = Node::new_unary_operation(UnaryOperator::LogicalNot, Node::new_literal(1));
        let and = Node::new_binary_operation(
            BinaryOperator::And,
            Node::new_literal(2),
            Node::new_literal(3),
        );
        let biconditional =
            Node::new_binary_operation(BinaryOperator::Biconditional, Node::new_literal(0), and);
        Node::new_binary_operation(BinaryOperator::Implication, not, biconditional)
    }

    #[test]
    fn single_literal_is_rendered_bare() {
        let tree = Node::new_literal(42);

        assert_eq!(tree.to_infix(), "42");
        assert_eq!(tree.to_postfix(), "42 ");
    }

    #[test]
    fn negative_literal_keeps_its_sign() {
        let tree = Node::new_literal(-5);

        assert_eq!(tree.to_infix(), "-5");
        assert_eq!(tree.to_postfix(), "-5 ");
    }

    #[test]
    fn logical_tree_is_rendered_in_infix() {
        assert_eq!(logical_tree().to_infix(), "(~(1))->((0)<->((2)&&(3)))");
    }

    #[test]
    fn logical_tree_is_rendered_in_postfix() {
        assert_eq!(logical_tree().to_postfix(), "1 ~ 0 2 3 && <-> -> ");
    }

    #[parameterized(
    operator = {
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::Modulo,
    BinaryOperator::And,
    BinaryOperator::Or,
    BinaryOperator::Implication,
    BinaryOperator::Biconditional,
    },
    symbol = { "+", "-", "*", "/", "%", "&&", "||", "->", "<->" }
    )]
    fn binary_operation_is_rendered_with_its_symbol(operator: BinaryOperator, symbol: &str) {
        let tree = Node::new_binary_operation(operator, Node::new_literal(7), Node::new_literal(8));

        pretty_assertions::assert_eq!(tree.to_infix(), format!("(7){}(8)", symbol));
        pretty_assertions::assert_eq!(tree.to_postfix(), format!("7 8 {} ", symbol));
    }

    #[parameterized(
    operator = { UnaryOperator::Negate, UnaryOperator::LogicalNot, UnaryOperator::Factorial },
    symbol = { "-", "~", "!" }
    )]
    fn unary_operation_is_rendered_with_its_symbol(operator: UnaryOperator, symbol: &str) {
        let tree = Node::new_unary_operation(operator, Node::new_literal(3));

        pretty_assertions::assert_eq!(tree.to_infix(), format!("{}(3)", symbol));
        pretty_assertions::assert_eq!(tree.to_postfix(), format!("3 {} ", symbol));
    }
}
