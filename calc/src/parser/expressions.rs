use crate::{
    ast::expressions::{BinaryOperation, Expression, UnaryOperation},
    evaluator::number::Number,
    lexer::{
        parsing::MAX_INT_MAGNITUDE,
        tokens::{Token, TokenType},
    },
};

use super::{BindingPower, ParseError, Parser};

pub(super) struct NUD<'a> {
    bp: BindingPower,
    op: Box<dyn FnOnce(&mut Parser, BindingPower) -> Result<Expression, ParseError> + 'a>,
}

impl<'a> NUD<'a> {
    pub fn parse(self, parser: &mut Parser) -> Result<Box<Expression>, ParseError> {
        (self.op)(parser, self.bp).map(Box::new)
    }

    fn new(
        bp: BindingPower,
        op: impl FnOnce(&mut Parser, BindingPower) -> Result<Expression, ParseError> + 'a,
    ) -> Option<Self> {
        Some(Self {
            bp,
            op: Box::new(op),
        })
    }

    fn literal(value: Number) -> Option<Self> {
        NUD::new(BindingPower::Literal, move |_, _| Ok(Expression::Literal(value)))
    }

    fn int_literal(token: &Token, magnitude: u64) -> Option<Self> {
        match i64::try_from(magnitude) {
            Ok(value) => NUD::literal(Number::Integer(value)),
            Err(_) => {
                let token = token.clone();
                NUD::new(BindingPower::Literal, move |_, _| {
                    Err(ParseError::LiteralOverflow(token))
                })
            }
        }
    }

    // `-9223372036854775808` is only an i64 as a whole
    fn negation() -> Option<Self> {
        NUD::new(BindingPower::Prefix, |p, bp| {
            if p
                .consume_if(|t| *t.value() == TokenType::IntLiteral(MAX_INT_MAGNITUDE))
                .is_some()
            {
                return Ok(Expression::Literal(Number::Integer(i64::MIN)));
            }
            Ok(Expression::Unary(
                UnaryOperation::InvertSign,
                p.parse_expression_capped(bp)?,
            ))
        })
    }

    // right-recursive, so `--5` is `-(-5)`
    fn prefix(op: UnaryOperation) -> Option<Self> {
        NUD::new(BindingPower::Prefix, move |p, bp| {
            Ok(Expression::Unary(op, p.parse_expression_capped(bp)?))
        })
    }

    fn group() -> Option<Self> {
        NUD::new(BindingPower::Default, |p, _| {
            let inner = p.parse_expression()?;
            p.expect(TokenType::RightParen)?;
            Ok(*inner)
        })
    }
}

pub(super) struct LED<'a> {
    bp: BindingPower,
    op: Box<
        dyn FnOnce(&mut Parser, BindingPower, Box<Expression>) -> Result<Expression, ParseError>
            + 'a,
    >,
}

impl<'a> LED<'a> {
    pub fn parse(
        self,
        parser: &mut Parser,
        left: Box<Expression>,
    ) -> Result<Box<Expression>, ParseError> {
        (self.op)(parser, self.bp, left).map(Box::new)
    }

    pub fn bp(&self) -> &BindingPower {
        &self.bp
    }

    fn new(
        bp: BindingPower,
        op: impl FnOnce(&mut Parser, BindingPower, Box<Expression>) -> Result<Expression, ParseError>
        + 'a,
    ) -> Option<Self> {
        Some(Self {
            bp,
            op: Box::new(op),
        })
    }

    fn binary(bp: BindingPower, op: BinaryOperation) -> Option<Self> {
        LED::new(bp, move |p, bp, left| {
            p.parse_expression_capped(bp)
                .map(|right| Expression::Binary(op, left, right))
        })
    }
}

pub(super) fn nud<'a>(token: &Token) -> Option<NUD<'a>> {
    match token.value() {
        TokenType::IntLiteral(value) => NUD::int_literal(token, *value),
        TokenType::FloatLiteral(value) => NUD::literal(Number::Float(*value)),
        TokenType::Minus => NUD::negation(),
        TokenType::Plus => NUD::prefix(UnaryOperation::Identity),
        TokenType::LeftParen => NUD::group(),
        _ => None,
    }
}

pub(super) fn led<'a>(token: &Token) -> Option<LED<'a>> {
    match token.value() {
        TokenType::Plus => LED::binary(BindingPower::Additive, BinaryOperation::Sum),
        TokenType::Minus => LED::binary(BindingPower::Additive, BinaryOperation::Subtract),
        TokenType::Asterisk => LED::binary(BindingPower::Multiplicative, BinaryOperation::Multiply),
        TokenType::Slash => LED::binary(BindingPower::Multiplicative, BinaryOperation::Divide),
        TokenType::Percent => LED::binary(BindingPower::Multiplicative, BinaryOperation::Remainder),
        _ => None,
    }
}
