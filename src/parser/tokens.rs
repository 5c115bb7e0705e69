//! Token types for the date-time lexer.

/// A token in a date-time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A run of digits. `digits` is the run length; `value` saturates
    /// rather than overflowing on very long runs.
    Number { value: u32, digits: usize },

    // Separators
    DateSep(char), // '/' or '-'
    Colon,         // :

    /// One or more whitespace characters (including '،' and '٫')
    Whitespace,

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
