use std::{error::Error as StdError, fmt::Display};

use evaluator::{EvalError, number::Number};
use lexer::LexError;
use parser::ParseError;

pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod parser;

pub use evaluator::evaluate;
pub use lexer::lex;
pub use parser::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    line: u32,
    col: u32,
    offset: usize,
}

impl SourcePosition {
    pub fn new(line: u32, col: u32, offset: usize) -> Self {
        Self { line, col, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    /// Byte offset from the beginning of the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

impl Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lex,
    Parse,
    Eval,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Lex => "lex",
            Stage::Parse => "parse",
            Stage::Eval => "eval",
        }
        .fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Error::Lex(_) => Stage::Lex,
            Error::Parse(_) => Stage::Parse,
            Error::Eval(_) => Stage::Eval,
        }
    }

    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            Error::Lex(err) => Some(err.pos()),
            Error::Parse(err) => Some(err.pos()),
            Error::Eval(_) => None,
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Lex(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Eval(err) => Some(err),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Error::Lex(err) => err.to_string(),
            Error::Parse(err) => err.to_string(),
            Error::Eval(err) => err.to_string(),
        };
        match self.position() {
            Some(pos) => write!(f, "{} error at {}: {}", self.stage(), pos, message),
            None => write!(f, "{} error: {}", self.stage(), message),
        }
    }
}

/// Runs the whole pipeline over `source`: lex, parse, then evaluate.
pub fn evaluate_source(source: &str) -> Result<Number, Error> {
    let tokens = lex(source)?;
    let tree = parse(tokens)?;
    Ok(evaluate(&tree)?)
}
