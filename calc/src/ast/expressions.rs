use std::fmt::Display;

use crate::evaluator::number::Number;

/// Expression tree; every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Number),
    Unary(UnaryOperation, Box<Expression>),
    Binary(BinaryOperation, Box<Expression>, Box<Expression>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperation {
    InvertSign, // -foo
    Identity,   // +foo
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperation {
    Sum,       // foo + bar
    Subtract,  // foo - bar
    Multiply,  // foo * bar
    Divide,    // foo / bar
    Remainder, // foo % bar
}

impl Display for UnaryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperation::InvertSign => "neg",
            UnaryOperation::Identity => "pos",
        }
        .fmt(f)
    }
}

impl Display for BinaryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperation::Sum => "add",
            BinaryOperation::Subtract => "sub",
            BinaryOperation::Multiply => "mul",
            BinaryOperation::Divide => "div",
            BinaryOperation::Remainder => "mod",
        }
        .fmt(f)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::Unary(op, operand) => write!(f, "({} {})", op, operand),
            Expression::Binary(op, left, right) => write!(f, "({} {} {})", op, left, right),
        }
    }
}
