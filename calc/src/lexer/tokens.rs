use std::fmt::Display;

use crate::SourcePosition;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    value: TokenType,
    pos: SourcePosition,
}

impl Token {
    pub fn new(value: TokenType, pos: SourcePosition) -> Self {
        Self { value, pos }
    }

    pub fn value(&self) -> &TokenType {
        &self.value
    }

    pub fn pos(&self) -> SourcePosition {
        self.pos
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.value, self.pos)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    // literals
    IntLiteral(u64),   // 1234, up to 2^63 so that `-9223372036854775808` lexes
    FloatLiteral(f64), // 1234.5678

    // symbols
    Plus,       // +
    Minus,      // -
    Asterisk,   // *
    Slash,      // /
    Percent,    // %
    LeftParen,  // (
    RightParen, // )

    EndOfInput,
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::IntLiteral(value) => write!(f, "INT:{}", value),
            TokenType::FloatLiteral(value) => write!(f, "FLOAT:{:?}", value),
            TokenType::Plus => "PLUS".fmt(f),
            TokenType::Minus => "MINUS".fmt(f),
            TokenType::Asterisk => "MULTIPLY".fmt(f),
            TokenType::Slash => "DIVIDE".fmt(f),
            TokenType::Percent => "MOD".fmt(f),
            TokenType::LeftParen => "LPAREN".fmt(f),
            TokenType::RightParen => "RPAREN".fmt(f),
            TokenType::EndOfInput => "EOF".fmt(f),
        }
    }
}
