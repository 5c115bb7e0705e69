//! Error types for conversion and parsing.

use std::fmt;

use thiserror::Error;

/// A named date or time field, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
        };
        f.write_str(name)
    }
}

/// Broad category of a failure.
///
/// Callers generally treat every category the same way (the input is not a
/// usable date), but the category is kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Text does not match the date-time grammar.
    MalformedInput,
    /// A field lies outside its nominal bounds.
    FieldOutOfRange,
    /// Fields are in range but do not name a real calendar date.
    CalendarInvalid,
    /// A computed day number failed its round-trip self-check.
    ArithmeticInconsistency,
}

/// Errors that can occur when converting a Jalali date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("{field} out of range: {value}")]
    FieldOutOfRange { field: Field, value: i64 },

    #[error("{year}/{month:02}/{day:02} is not a valid Jalali date")]
    CalendarInvalid { year: i32, month: u32, day: u32 },

    #[error("day number {jdn} did not survive the Gregorian round trip")]
    ArithmeticInconsistency { jdn: i64 },
}

impl ConvertError {
    pub(crate) fn out_of_range(field: Field, value: impl Into<i64>) -> Self {
        ConvertError::FieldOutOfRange {
            field,
            value: value.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::FieldOutOfRange { .. } => ErrorKind::FieldOutOfRange,
            ConvertError::CalendarInvalid { .. } => ErrorKind::CalendarInvalid,
            ConvertError::ArithmeticInconsistency { .. } => ErrorKind::ArithmeticInconsistency,
        }
    }
}

/// Errors that can occur when parsing date-time text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty date-time text")]
    Empty,

    #[error("unexpected character at position {position}: found '{found}'")]
    UnexpectedChar { position: usize, found: char },

    #[error("unexpected token at position {position}: found '{found}'")]
    UnexpectedToken { position: usize, found: char },

    #[error("unexpected end of input at position {position}")]
    UnexpectedEnd { position: usize },

    #[error("{field} at position {position} must have {min} to {max} digits, found {found}")]
    DigitCount {
        field: Field,
        position: usize,
        min: usize,
        max: usize,
        found: usize,
    },

    #[error(transparent)]
    Invalid(#[from] ConvertError),
}

impl ParseError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Invalid(err) => err.kind(),
            _ => ErrorKind::MalformedInput,
        }
    }
}
