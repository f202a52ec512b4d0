use std::{
    error::Error,
    fmt::Display,
    num::{IntErrorKind, ParseFloatError, ParseIntError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberParseError {
    InvalidInt,
    PositiveOverflow,
    InvalidFloat,
}

impl Error for NumberParseError {}
impl Display for NumberParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberParseError::InvalidInt => "invalid digits found",
            NumberParseError::PositiveOverflow => "positive overflow",
            NumberParseError::InvalidFloat => "invalid float",
        }
        .fmt(f)
    }
}

/// Largest integer literal magnitude, only representable in `i64` when negated.
pub const MAX_INT_MAGNITUDE: u64 = i64::MIN.unsigned_abs();

fn map_int_error(err: ParseIntError) -> NumberParseError {
    match err.kind() {
        IntErrorKind::PosOverflow => NumberParseError::PositiveOverflow,
        _ => NumberParseError::InvalidInt,
    }
}

fn map_float_error(_: ParseFloatError) -> NumberParseError {
    NumberParseError::InvalidFloat
}

pub(super) fn parse_int(source: &str) -> Result<u64, NumberParseError> {
    source
        .parse()
        .map_err(map_int_error)
        .and_then(|val: u64| {
            if val > MAX_INT_MAGNITUDE {
                Err(NumberParseError::PositiveOverflow)
            } else {
                Ok(val)
            }
        })
}

pub(super) fn parse_float(source: &str) -> Result<f64, NumberParseError> {
    source
        .parse()
        .map_err(map_float_error)
        .and_then(|val: f64| {
            if val > f64::MAX {
                Err(NumberParseError::PositiveOverflow)
            } else {
                Ok(val)
            }
        })
}
