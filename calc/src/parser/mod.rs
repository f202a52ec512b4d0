use std::{error::Error, fmt::Display, iter::Peekable};

use binding::BindingPower;

use crate::{
    SourcePosition,
    ast::expressions::Expression,
    lexer::tokens::{Token, TokenType},
};

mod binding;
mod expressions;

/// Bound on nested parentheses and prefix operators, each costing several
/// parser frames.
pub const MAX_NESTING: usize = 256;

/// Bound on expression tree height. Evaluation and dropping recurse once per level.
pub const MAX_DEPTH: usize = 2048;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    ExpectedToken { expected: TokenType, found: Token },
    UnexpectedEnd(SourcePosition),
    UnexpectedToken(Token),
    TrailingInput(Token),
    LiteralOverflow(Token),
    TooDeep(SourcePosition),
}

impl ParseError {
    pub fn pos(&self) -> SourcePosition {
        match self {
            ParseError::ExpectedToken { found, .. } => found.pos(),
            ParseError::UnexpectedEnd(pos) | ParseError::TooDeep(pos) => *pos,
            ParseError::UnexpectedToken(token)
            | ParseError::TrailingInput(token)
            | ParseError::LiteralOverflow(token) => token.pos(),
        }
    }
}

impl Error for ParseError {}
impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::ExpectedToken { expected, found } => {
                write!(f, "expected {}, found {}", expected, found.value())
            }
            ParseError::UnexpectedEnd(_) => "unexpected end of input".fmt(f),
            ParseError::UnexpectedToken(token) => write!(f, "unexpected {}", token.value()),
            ParseError::TrailingInput(token) => {
                write!(f, "unexpected {} after expression", token.value())
            }
            ParseError::LiteralOverflow(token) => {
                write!(f, "integer literal {} does not fit in 64 bits", token.value())
            }
            ParseError::TooDeep(_) => "expression nested too deeply".fmt(f),
        }
    }
}

/// Pratt parser over a token stream terminated by [`TokenType::EndOfInput`].
///
/// The end marker is peeked but never consumed, so the parser cannot read past it.
pub struct Parser<'a> {
    source: Peekable<Box<dyn Iterator<Item = Token> + 'a>>,
    last_pos: SourcePosition,
    nesting: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: Box<dyn Iterator<Item = Token> + 'a>) -> Self {
        Self {
            source: source.peekable(),
            last_pos: SourcePosition::start(),
            nesting: 0,
            depth: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Expression, ParseError> {
        let expression = self.parse_expression()?;
        let token = self.consume()?;
        match token.value() {
            TokenType::EndOfInput => Ok(*expression),
            _ => Err(ParseError::TrailingInput(token)),
        }
    }

    fn consume(&mut self) -> Result<Token, ParseError> {
        if let Some(token) = self
            .source
            .next_if(|t| *t.value() != TokenType::EndOfInput)
        {
            self.last_pos = token.pos();
            return Ok(token);
        }
        self.source
            .peek()
            .cloned()
            .ok_or(ParseError::UnexpectedEnd(self.last_pos))
    }

    fn consume_if(&mut self, filter: impl FnOnce(&Token) -> bool) -> Option<Token> {
        let token = self
            .source
            .next_if(|t| *t.value() != TokenType::EndOfInput && filter(t))?;
        self.last_pos = token.pos();
        Some(token)
    }

    fn peek(&mut self) -> Option<&Token> {
        self.source.peek()
    }

    fn expect(&mut self, expected: TokenType) -> Result<Token, ParseError> {
        let found = self.consume()?;
        if *found.value() == expected {
            Ok(found)
        } else {
            Err(ParseError::ExpectedToken { expected, found })
        }
    }

    fn unexpected(token: Token) -> ParseError {
        match token.value() {
            TokenType::EndOfInput => ParseError::UnexpectedEnd(token.pos()),
            _ => ParseError::UnexpectedToken(token),
        }
    }

    fn parse_expression(&mut self) -> Result<Box<Expression>, ParseError> {
        self.parse_expression_capped(BindingPower::Default)
    }

    // every nested call and every folded operator may add a tree level
    fn descend(&mut self, nested: bool, pos: SourcePosition) -> Result<(), ParseError> {
        self.nesting += usize::from(nested);
        self.depth += 1;
        if self.nesting > MAX_NESTING || self.depth > MAX_DEPTH {
            Err(ParseError::TooDeep(pos))
        } else {
            Ok(())
        }
    }

    fn parse_expression_capped(
        &mut self,
        min_bp: BindingPower,
    ) -> Result<Box<Expression>, ParseError> {
        let (nesting, depth) = (self.nesting, self.depth);
        let result = self.parse_expression_bounded(min_bp);
        (self.nesting, self.depth) = (nesting, depth);
        result
    }

    fn parse_expression_bounded(
        &mut self,
        min_bp: BindingPower,
    ) -> Result<Box<Expression>, ParseError> {
        let token = self.consume()?;
        self.descend(true, token.pos())?;
        let parselet = expressions::nud(&token).ok_or_else(|| Self::unexpected(token.clone()))?;
        let mut left = parselet.parse(self)?;
        // tokens without an infix meaning end the expression, the caller decides if that is legal
        while let Some(parselet) = self.peek().and_then(expressions::led) {
            if parselet.bp() > &min_bp {
                let operator = self.consume()?;
                self.descend(false, operator.pos())?;
                left = parselet.parse(self, left)?;
            } else {
                break;
            }
        }
        Ok(left)
    }
}

/// Builds the expression tree for a complete token sequence.
pub fn parse(tokens: Vec<Token>) -> Result<Expression, ParseError> {
    Parser::new(Box::new(tokens.into_iter())).parse()
}
