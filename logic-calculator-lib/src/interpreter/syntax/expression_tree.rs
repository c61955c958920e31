use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::renderer::{InfixRenderer, PostfixRenderer};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_unary_operation, SyntaxVisitor,
};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    Literal(i64),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
}

impl Node {
    pub fn new_literal(value: i64) -> Node {
        Node::Literal(value)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_unary_operation(operator: UnaryOperator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_binary_addition(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Add, left_operand, right_operand)
    }

    pub fn new_binary_subtraction(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Subtract, left_operand, right_operand)
    }

    pub fn new_binary_multiplication(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Multiply, left_operand, right_operand)
    }

    pub fn new_negation(operand: Node) -> Node {
        Self::new_unary_operation(UnaryOperator::Negate, operand)
    }

    pub fn new_factorial(operand: Node) -> Node {
        Self::new_unary_operation(UnaryOperator::Factorial, operand)
    }

    /// Counts the nodes of the tree rooted here, this node included.
    pub fn size(&self) -> usize {
        let mut visitor = CountingVisitor { count: 0 };
        self.accept(&mut visitor);
        visitor.count
    }

    /// Number of levels in the tree rooted here, a lone literal being one level.
    pub fn depth(&self) -> usize {
        let mut visitor = DepthVisitor {
            level: 0,
            deepest: 0,
        };
        self.accept(&mut visitor);
        visitor.deepest
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Literal(value) => visitor.visit_literal(*value),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
        }
    }

    /// Renders the tree in infix notation, with every operand parenthesized.
    pub fn to_infix(&self) -> String {
        let mut renderer = InfixRenderer::default();
        self.accept(&mut renderer);
        renderer.into_output()
    }

    /// Renders the tree in reverse polish notation, every token followed by a space.
    pub fn to_postfix(&self) -> String {
        let mut renderer = PostfixRenderer::default();
        self.accept(&mut renderer);
        renderer.into_output()
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal(&mut self, value: i64) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.builder.begin_child(format!("{}", operator));
        walk_unary_operation(self, operand);
        self.builder.end_child();
    }
}

struct CountingVisitor {
    count: usize,
}

impl SyntaxVisitor for CountingVisitor {
    fn visit_literal(&mut self, _value: i64) {
        self.count += 1;
    }
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.count += 1;
        walk_binary_operation(self, left_operand, right_operand);
    }
    fn visit_unary_operation(&mut self, _operator: &UnaryOperator, operand: &Node) {
        self.count += 1;
        walk_unary_operation(self, operand);
    }
}

struct DepthVisitor {
    level: usize,
    deepest: usize,
}

impl SyntaxVisitor for DepthVisitor {
    fn visit_literal(&mut self, _value: i64) {
        self.deepest = self.deepest.max(self.level + 1);
    }
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.level += 1;
        walk_binary_operation(self, left_operand, right_operand);
        self.level -= 1;
    }
    fn visit_unary_operation(&mut self, _operator: &UnaryOperator, operand: &Node) {
        self.level += 1;
        walk_unary_operation(self, operand);
        self.level -= 1;
    }
}
