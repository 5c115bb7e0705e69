//! Parser for Jalali date-time text.
//!
//! Accepted grammar, with surrounding whitespace ignored. Digits may be
//! ASCII, Persian, or Arabic-Indic:
//!
//! ```text
//! YYY[Y] SEP M[M] SEP D[D] [ WS H[H] [ ':' M[M] ] ]
//! SEP = '/' | '-'
//! ```
//!
//! Year-only and year-month inputs are rejected. Hour and minute are range
//! checked before any calendar conversion is attempted.

pub mod lexer;
pub mod tokens;

use crate::datetime::{LocalDateTime, MAX_HOUR, MAX_MINUTE};
use crate::error::{ConvertError, Field, ParseError};
use crate::options::ParseOptions;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Raw fields read from the text, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Parse Jalali date-time text with default options.
pub fn parse(input: &str) -> Result<LocalDateTime, ParseError> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse Jalali date-time text into a local Gregorian date-time.
pub fn parse_with_options(input: &str, opts: &ParseOptions) -> Result<LocalDateTime, ParseError> {
    let result = parse_fields(input, opts).and_then(|fields| to_datetime(&fields));
    if let Err(err) = &result {
        tracing::debug!(input, error = %err, "rejected Jalali date-time text");
    }
    result
}

/// Parse text into raw fields without checking ranges or the calendar.
pub fn parse_fields(input: &str, opts: &ParseOptions) -> Result<Fields, ParseError> {
    let lexer = if opts.normalize_digits {
        Lexer::with_digit_normalization(input)
    } else {
        Lexer::new(input)
    };
    let mut parser = Parser::new(lexer)?;
    parser.parse(opts)
}

fn to_datetime(fields: &Fields) -> Result<LocalDateTime, ParseError> {
    if fields.hour > MAX_HOUR {
        return Err(ConvertError::out_of_range(Field::Hour, fields.hour).into());
    }
    if fields.minute > MAX_MINUTE {
        return Err(ConvertError::out_of_range(Field::Minute, fields.minute).into());
    }
    // Four digits at most, so the year always fits
    let year = i32::try_from(fields.year)
        .map_err(|_| ConvertError::out_of_range(Field::Year, fields.year))?;
    Ok(LocalDateTime::from_jalali(
        year,
        fields.month,
        fields.day,
        fields.hour,
        fields.minute,
    )?)
}

/// Parser for date-time strings.
struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Current token
    current: SpannedToken,
}

impl<'a> Parser<'a> {
    /// Create a new parser reading from the given lexer.
    fn new(mut lexer: Lexer<'a>) -> Result<Self, ParseError> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Advance to the next token.
    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn parse(&mut self, opts: &ParseOptions) -> Result<Fields, ParseError> {
        self.skip_whitespace()?;
        if self.current.token == Token::Eof {
            return Err(ParseError::Empty);
        }

        let year = self.expect_number(Field::Year, 3, 4)?;
        self.expect_date_separator()?;
        let month = self.expect_number(Field::Month, 1, 2)?;
        self.expect_date_separator()?;
        let day = self.expect_number(Field::Day, 1, 2)?;

        let (hour, minute) = self.parse_time(opts)?;

        if self.current.token != Token::Eof {
            return Err(self.unexpected());
        }

        Ok(Fields {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Parse the optional time part. Leaves the parser at end of input on success.
    fn parse_time(&mut self, opts: &ParseOptions) -> Result<(u32, u32), ParseError> {
        if self.current.token != Token::Whitespace {
            return Ok((0, 0));
        }
        self.skip_whitespace()?;
        if self.current.token == Token::Eof || !opts.allow_time {
            return Ok((0, 0));
        }

        let hour = self.expect_number(Field::Hour, 1, 2)?;
        let mut minute = 0;
        if self.current.token == Token::Colon {
            self.advance()?;
            minute = self.expect_number(Field::Minute, 1, 2)?;
        }
        self.skip_whitespace()?;
        Ok((hour, minute))
    }

    fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while self.current.token == Token::Whitespace {
            self.advance()?;
        }
        Ok(())
    }

    fn expect_number(&mut self, field: Field, min: usize, max: usize) -> Result<u32, ParseError> {
        let Token::Number { value, digits } = self.current.token else {
            return Err(self.unexpected());
        };
        if !(min..=max).contains(&digits) {
            return Err(ParseError::DigitCount {
                field,
                position: self.current.start,
                min,
                max,
                found: digits,
            });
        }
        self.advance()?;
        Ok(value)
    }

    fn expect_date_separator(&mut self) -> Result<(), ParseError> {
        if !matches!(self.current.token, Token::DateSep(_)) {
            return Err(self.unexpected());
        }
        self.advance()
    }

    /// Error for the current token appearing where it is not allowed.
    fn unexpected(&self) -> ParseError {
        let position = self.current.start;
        match self.lexer.input[position..].chars().next() {
            Some(found) => ParseError::UnexpectedToken { position, found },
            None => ParseError::UnexpectedEnd { position },
        }
    }
}
