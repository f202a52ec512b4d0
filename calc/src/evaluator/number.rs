use std::fmt::Display;

use crate::ast::expressions::BinaryOperation;

use super::EvalError;

/// Runtime value. Integers stay integers until they meet a float or a division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_float(self) -> f64 {
        match self {
            Number::Integer(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn negate(self) -> Result<Number, EvalError> {
        match self {
            Number::Integer(value) => value
                .checked_neg()
                .map(Number::Integer)
                .ok_or(EvalError::NegationOverflow),
            Number::Float(value) => Ok(Number::Float(-value)),
        }
    }

    pub fn apply(self, op: BinaryOperation, other: Number) -> Result<Number, EvalError> {
        match (self, other) {
            (Number::Integer(left), Number::Integer(right)) => integer_op(op, left, right),
            (left, right) => float_op(op, left.as_float(), right.as_float()),
        }
    }
}

fn integer_op(op: BinaryOperation, left: i64, right: i64) -> Result<Number, EvalError> {
    let result = match op {
        BinaryOperation::Sum => left.checked_add(right),
        BinaryOperation::Subtract => left.checked_sub(right),
        BinaryOperation::Multiply => left.checked_mul(right),
        // never truncates
        BinaryOperation::Divide => return float_op(op, left as f64, right as f64),
        BinaryOperation::Remainder if right == 0 => return Err(EvalError::DivisionByZero),
        BinaryOperation::Remainder => Some(floor_rem(left, right)),
    };
    result.map(Number::Integer).ok_or(EvalError::Overflow(op))
}

// floor modulo: the result takes the sign of the divisor, `-7 % 3` is 2
fn floor_rem(left: i64, right: i64) -> i64 {
    // `i64::MIN % -1` is 0, not an overflow
    let rem = left.wrapping_rem(right);
    if rem != 0 && (rem < 0) != (right < 0) {
        rem + right
    } else {
        rem
    }
}

fn floor_rem_float(left: f64, right: f64) -> f64 {
    let rem = left % right;
    if rem != 0.0 && (rem < 0.0) != (right < 0.0) {
        rem + right
    } else {
        rem
    }
}

fn float_op(op: BinaryOperation, left: f64, right: f64) -> Result<Number, EvalError> {
    let result = match op {
        BinaryOperation::Sum => left + right,
        BinaryOperation::Subtract => left - right,
        BinaryOperation::Multiply => left * right,
        BinaryOperation::Divide | BinaryOperation::Remainder if right == 0.0 => {
            return Err(EvalError::DivisionByZero);
        }
        BinaryOperation::Divide => left / right,
        BinaryOperation::Remainder => floor_rem_float(left, right),
    };
    if result.is_finite() {
        Ok(Number::Float(result))
    } else {
        Err(EvalError::Overflow(op))
    }
}

/// Canonical decimal text: integers without a decimal point, floats always with one.
impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{}", value),
            Number::Float(value) => {
                let text = value.to_string();
                if text.contains('.') || !value.is_finite() {
                    text.fmt(f)
                } else {
                    write!(f, "{}.0", text)
                }
            }
        }
    }
}
