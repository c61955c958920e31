use crate::interpreter::error::ArithmeticError;
use std::fmt;
use std::fmt::Formatter;

/// A binary operator, either arithmetic or logical.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    And,
    Or,
    Implication,
    Biconditional,
}

/// An unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    LogicalNot,
    Factorial,
}

/// Either kind of operator, as it sits on the operator stack while parsing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::LogicalNot => "~",
            UnaryOperator::Factorial => "!",
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        6
    }

    pub fn evaluate(&self, x: i64) -> Result<i64, ArithmeticError> {
        match self {
            UnaryOperator::Negate => x
                .checked_neg()
                .ok_or_else(|| ArithmeticError::overflow(format!("-({})", x))),
            UnaryOperator::LogicalNot => Ok(from_truth(!is_truthy(x))),
            UnaryOperator::Factorial => factorial(x),
        }
    }
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::Implication => "->",
            BinaryOperator::Biconditional => "<->",
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Biconditional => 0,
            BinaryOperator::Implication => 1,
            BinaryOperator::Or => 2,
            BinaryOperator::And => 3,
            BinaryOperator::Add | BinaryOperator::Subtract => 4,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 5,
        }
    }

    pub fn evaluate(&self, a: i64, b: i64) -> Result<i64, ArithmeticError> {
        let overflow = || ArithmeticError::overflow(format!("{} {} {}", a, self.symbol(), b));
        match self {
            BinaryOperator::Add => a.checked_add(b).ok_or_else(overflow),
            BinaryOperator::Subtract => a.checked_sub(b).ok_or_else(overflow),
            BinaryOperator::Multiply => a.checked_mul(b).ok_or_else(overflow),
            BinaryOperator::Divide if b == 0 => Err(ArithmeticError::DivisionByZero { dividend: a }),
            BinaryOperator::Divide => a.checked_div(b).ok_or_else(overflow),
            BinaryOperator::Modulo if b == 0 => Err(ArithmeticError::ModuloByZero { dividend: a }),
            BinaryOperator::Modulo => a.checked_rem(b).ok_or_else(overflow),
            BinaryOperator::And => Ok(from_truth(is_truthy(a) && is_truthy(b))),
            BinaryOperator::Or => Ok(from_truth(is_truthy(a) || is_truthy(b))),
            BinaryOperator::Implication => Ok(from_truth(implies(a, b))),
            BinaryOperator::Biconditional => Ok(from_truth(implies(a, b) && implies(b, a))),
        }
    }
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Unary(operator) => operator.symbol(),
            Operator::Binary(operator) => operator.symbol(),
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Operator::Unary(operator) => operator.precedence(),
            Operator::Binary(operator) => operator.precedence(),
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Number of operands the operator consumes.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Unary(_) => 1,
            Operator::Binary(_) => 2,
        }
    }
}

fn is_truthy(value: i64) -> bool {
    value != 0
}

fn from_truth(truth: bool) -> i64 {
    i64::from(truth)
}

fn implies(a: i64, b: i64) -> bool {
    !is_truthy(a) || is_truthy(b)
}

fn factorial(n: i64) -> Result<i64, ArithmeticError> {
    if n < 0 {
        return Err(ArithmeticError::NegativeFactorial { operand: n });
    }
    (2..=n).try_fold(1_i64, |product, factor| {
        product
            .checked_mul(factor)
            .ok_or_else(|| ArithmeticError::overflow(format!("{}!", n)))
    })
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_ge_correspond_with_precedence() {
        let equal1 = Operator::Binary(BinaryOperator::Multiply);
        let equal2 = Operator::Binary(BinaryOperator::Modulo);
        assert!(equal1.precedence_ge(&equal2))
    }

    #[test]
    fn lower_precedence_is_not_ge() {
        let greater = Operator::Binary(BinaryOperator::And);
        let lesser = Operator::Binary(BinaryOperator::Or);
        assert!(greater.precedence_ge(&lesser));
        assert!(!lesser.precedence_ge(&greater))
    }

    #[test]
    fn unary_operators_bind_tighter_than_every_binary_operator() {
        let negate = Operator::Unary(UnaryOperator::Negate);
        let multiply = Operator::Binary(BinaryOperator::Multiply);
        assert!(!multiply.precedence_ge(&negate))
    }

    #[test]
    fn precedence_table_is_ordered_from_biconditional_to_multiplication() {
        let ordered = [
            BinaryOperator::Biconditional,
            BinaryOperator::Implication,
            BinaryOperator::Or,
            BinaryOperator::And,
            BinaryOperator::Add,
            BinaryOperator::Multiply,
        ];
        let precedences: Vec<u8> = ordered.iter().map(BinaryOperator::precedence).collect();
        assert_eq!(precedences, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(BinaryOperator::Subtract.precedence(), 4);
        assert_eq!(BinaryOperator::Divide.precedence(), 5);
        assert_eq!(BinaryOperator::Modulo.precedence(), 5);
    }

    #[parameterized(
    a = { 0, 0, 1, 1 },
    b = { 0, 1, 0, 1 },
    implication = { 1, 1, 0, 1 },
    biconditional = { 1, 0, 0, 1 }
    )]
    fn logical_connectives_follow_truth_table(a: i64, b: i64, implication: i64, biconditional: i64) {
        assert_eq!(BinaryOperator::Implication.evaluate(a, b).unwrap(), implication);
        assert_eq!(BinaryOperator::Biconditional.evaluate(a, b).unwrap(), biconditional);
    }

    #[test]
    fn logical_operators_coerce_non_zero_to_true() {
        assert_eq!(BinaryOperator::And.evaluate(-4, 9).unwrap(), 1);
        assert_eq!(BinaryOperator::Or.evaluate(0, -1).unwrap(), 1);
        assert_eq!(UnaryOperator::LogicalNot.evaluate(17).unwrap(), 0);
        assert_eq!(UnaryOperator::LogicalNot.evaluate(0).unwrap(), 1);
    }

    #[test]
    fn division_and_modulo_truncate_toward_zero() {
        assert_eq!(BinaryOperator::Divide.evaluate(-7, 2).unwrap(), -3);
        assert_eq!(BinaryOperator::Modulo.evaluate(-7, 2).unwrap(), -1);
        assert_eq!(BinaryOperator::Modulo.evaluate(7, -2).unwrap(), 1);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            BinaryOperator::Divide.evaluate(1, 0),
            Err(ArithmeticError::DivisionByZero { dividend: 1 })
        );
        assert_eq!(
            BinaryOperator::Modulo.evaluate(5, 0),
            Err(ArithmeticError::ModuloByZero { dividend: 5 })
        );
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(matches!(
            BinaryOperator::Add.evaluate(i64::MAX, 1),
            Err(ArithmeticError::Overflow { .. })
        ));
        assert!(matches!(
            BinaryOperator::Divide.evaluate(i64::MIN, -1),
            Err(ArithmeticError::Overflow { .. })
        ));
        assert!(matches!(
            UnaryOperator::Negate.evaluate(i64::MIN),
            Err(ArithmeticError::Overflow { .. })
        ));
    }

    #[parameterized(
    n = { 0, 1, 3, 5, 20 },
    expected = { 1, 1, 6, 120, 2432902008176640000 }
    )]
    fn factorial_returns_product_of_all_positive_integers_up_to_n(n: i64, expected: i64) {
        assert_eq!(UnaryOperator::Factorial.evaluate(n).unwrap(), expected);
    }

    #[test]
    fn factorial_rejects_negative_operands_and_overflow() {
        assert_eq!(
            UnaryOperator::Factorial.evaluate(-3),
            Err(ArithmeticError::NegativeFactorial { operand: -3 })
        );
        assert!(matches!(
            UnaryOperator::Factorial.evaluate(21),
            Err(ArithmeticError::Overflow { .. })
        ));
    }
}
