use std::{error::Error, fmt::Display, iter::Peekable};

use parsing::NumberParseError;
use tokens::{Token, TokenType};

use crate::SourcePosition;

pub mod parsing;
pub mod tokens;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    UnexpectedCharacter(char, SourcePosition),
    MalformedNumber {
        text: String,
        pos: SourcePosition,
        cause: NumberParseError,
    },
}

impl LexError {
    pub fn pos(&self) -> SourcePosition {
        match self {
            LexError::UnexpectedCharacter(_, pos) => *pos,
            LexError::MalformedNumber { pos, .. } => *pos,
        }
    }
}

impl Error for LexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LexError::MalformedNumber { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::UnexpectedCharacter(ch, _) => write!(f, "unexpected character '{}'", ch),
            LexError::MalformedNumber { text, cause, .. } => {
                write!(f, "malformed number {}: {}", text, cause)
            }
        }
    }
}

/// Streaming scanner over a character source.
///
/// Yields exactly one [`TokenType::EndOfInput`] after the last real token and
/// stops after it, or after the first error.
pub struct Lexer<'a> {
    source: Peekable<Box<dyn Iterator<Item = char> + 'a>>,
    buffer: String,
    pos: SourcePosition,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: impl Iterator<Item = char> + 'a) -> Self {
        let source: Box<dyn Iterator<Item = char> + 'a> = Box::new(source);
        Self {
            source: source.peekable(),
            buffer: String::new(),
            pos: SourcePosition::start(),
            finished: false,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.source.next()?;
        self.pos.advance(ch);
        Some(ch)
    }

    // line endings other than '\n' belong to whoever supplied the text
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.source.next_if(|&ch| matches!(ch, ' ' | '\t' | '\n')) {
            self.pos.advance(ch);
        }
    }

    // digits with at most one '.', a second '.' ends the literal
    fn number(&mut self, start: SourcePosition) -> Result<TokenType, LexError> {
        self.buffer.clear();
        let mut decimal_point = false;
        while let Some(ch) = self
            .source
            .next_if(|&ch| ch.is_ascii_digit() || (ch == '.' && !decimal_point))
        {
            self.pos.advance(ch);
            decimal_point |= ch == '.';
            self.buffer.push(ch);
        }
        let literal = if decimal_point {
            parsing::parse_float(&self.buffer).map(TokenType::FloatLiteral)
        } else {
            parsing::parse_int(&self.buffer).map(TokenType::IntLiteral)
        };
        literal.map_err(|cause| LexError::MalformedNumber {
            text: self.buffer.clone(),
            pos: start,
            cause,
        })
    }

    fn symbol(ch: char) -> Option<TokenType> {
        match ch {
            '+' => Some(TokenType::Plus),
            '-' => Some(TokenType::Minus),
            '*' => Some(TokenType::Asterisk),
            '/' => Some(TokenType::Slash),
            '%' => Some(TokenType::Percent),
            '(' => Some(TokenType::LeftParen),
            ')' => Some(TokenType::RightParen),
            _ => None,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        self.skip_whitespace();
        let start = self.pos;
        let result = match self.source.peek().copied() {
            None => Ok(TokenType::EndOfInput),
            Some(ch) if ch.is_ascii_digit() => self.number(start),
            Some(ch) => {
                self.bump();
                Self::symbol(ch).ok_or(LexError::UnexpectedCharacter(ch, start))
            }
        };
        self.finished = matches!(result, Ok(TokenType::EndOfInput) | Err(_));
        Some(result.map(|value| Token::new(value, start)))
    }
}

/// Scans the whole `source`, failing on the first invalid input.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source.chars()).collect()
}
