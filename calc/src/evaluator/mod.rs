use std::{error::Error, fmt::Display};

use number::Number;

use crate::ast::expressions::{BinaryOperation, Expression, UnaryOperation};

pub mod number;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    DivisionByZero,
    Overflow(BinaryOperation),
    NegationOverflow,
}

impl Error for EvalError {}
impl Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::DivisionByZero => "division by zero".fmt(f),
            EvalError::Overflow(op) => write!(f, "numeric overflow in {}", op),
            EvalError::NegationOverflow => "numeric overflow in neg".fmt(f),
        }
    }
}

/// Post-order walk of `expression`, promoting to float where needed.
pub fn evaluate(expression: &Expression) -> Result<Number, EvalError> {
    match expression {
        Expression::Literal(value) => Ok(*value),
        Expression::Unary(op, operand) => {
            let value = evaluate(operand)?;
            match op {
                UnaryOperation::InvertSign => value.negate(),
                UnaryOperation::Identity => Ok(value),
            }
        }
        Expression::Binary(op, left, right) => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            left.apply(*op, right)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::ast::expressions::{BinaryOperation, Expression, UnaryOperation};

    use super::{EvalError, evaluate, number::Number};

    fn int(value: i64) -> Box<Expression> {
        Box::new(Expression::Literal(Number::Integer(value)))
    }

    fn float(value: f64) -> Box<Expression> {
        Box::new(Expression::Literal(Number::Float(value)))
    }

    fn binary(op: BinaryOperation, left: Box<Expression>, right: Box<Expression>) -> Box<Expression> {
        Box::new(Expression::Binary(op, left, right))
    }

    fn negate(operand: Box<Expression>) -> Box<Expression> {
        Box::new(Expression::Unary(UnaryOperation::InvertSign, operand))
    }

    #[rstest]
    #[case(int(42), Number::Integer(42))]
    #[case(float(2.5), Number::Float(2.5))]
    #[case(negate(int(5)), Number::Integer(-5))]
    #[case(negate(negate(int(5))), Number::Integer(5))]
    #[case(negate(float(1.5)), Number::Float(-1.5))]
    #[case(Box::new(Expression::Unary(UnaryOperation::Identity, int(3))), Number::Integer(3))]
    #[case(
        binary(
            BinaryOperation::Sum,
            int(2),
            binary(BinaryOperation::Multiply, int(3), int(4)),
        ),
        Number::Integer(14)
    )]
    #[case(
        binary(
            BinaryOperation::Subtract,
            binary(BinaryOperation::Subtract, int(1), int(2)),
            int(3),
        ),
        Number::Integer(-4)
    )]
    #[case(binary(BinaryOperation::Sum, float(3.5), int(1)), Number::Float(4.5))]
    #[case(binary(BinaryOperation::Divide, int(1), int(4)), Number::Float(0.25))]
    #[case(binary(BinaryOperation::Remainder, int(10), int(4)), Number::Integer(2))]
    fn evaluate_ok(#[case] expression: Box<Expression>, #[case] expected: Number) {
        assert_eq!(Ok(expected), evaluate(&expression));
    }

    #[rstest]
    #[case(binary(BinaryOperation::Divide, int(1), int(0)), EvalError::DivisionByZero)]
    #[case(
        binary(
            BinaryOperation::Divide,
            int(1),
            binary(BinaryOperation::Subtract, float(2.0), int(2)),
        ),
        EvalError::DivisionByZero
    )]
    #[case(
        binary(BinaryOperation::Sum, int(i64::MAX), int(1)),
        EvalError::Overflow(BinaryOperation::Sum)
    )]
    #[case(
        negate(binary(BinaryOperation::Subtract, negate(int(i64::MAX)), int(1))),
        EvalError::NegationOverflow
    )]
    fn evaluate_fail(#[case] expression: Box<Expression>, #[case] expected: EvalError) {
        assert_eq!(Err(expected), evaluate(&expression));
    }

    #[test]
    fn left_error_wins() {
        let expression = binary(
            BinaryOperation::Sum,
            binary(BinaryOperation::Divide, int(1), int(0)),
            binary(BinaryOperation::Sum, int(i64::MAX), int(1)),
        );
        assert_eq!(Err(EvalError::DivisionByZero), evaluate(&expression));
    }

    #[rstest]
    #[case(EvalError::DivisionByZero, "division by zero")]
    #[case(EvalError::Overflow(BinaryOperation::Multiply), "numeric overflow in mul")]
    #[case(EvalError::NegationOverflow, "numeric overflow in neg")]
    fn error_display(#[case] error: EvalError, #[case] expected: &str) {
        assert_eq!(expected, error.to_string());
    }
}
