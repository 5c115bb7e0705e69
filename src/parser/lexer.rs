//! Lexer for tokenizing date-time strings.
//!
//! Positions are byte offsets into the caller's text. When digit
//! normalization is enabled, Persian and Arabic-Indic digits are read in
//! place, so offsets still point at the original glyphs.

use crate::digits::normalize_digit;
use crate::error::ParseError;
use crate::parser::tokens::{SpannedToken, Token};

/// Arabic comma, treated as whitespace.
const ARABIC_COMMA: char = '\u{060C}';
/// Arabic decimal separator, treated as whitespace.
const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';
/// Byte order mark, left behind by some copy-paste sources.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

fn is_space(ch: char) -> bool {
    ch.is_whitespace()
        || ch == ARABIC_COMMA
        || ch == ARABIC_DECIMAL_SEPARATOR
        || ch == BYTE_ORDER_MARK
}

/// A lexer for date-time strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current position in the input.
    position: usize,
    /// Whether Persian and Arabic-Indic digits count as digits.
    normalize_digits: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer that accepts ASCII digits only.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            normalize_digits: false,
        }
    }

    /// Creates a new lexer that also reads Persian and Arabic-Indic digits.
    pub fn with_digit_normalization(input: &'a str) -> Self {
        Self {
            normalize_digits: true,
            ..Self::new(input)
        }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = match ch {
            c if self.digit_value(c).is_some() => self.lex_number(),
            '/' | '-' => {
                self.advance();
                Token::DateSep(ch)
            }
            ':' => {
                self.advance();
                Token::Colon
            }
            c if is_space(c) => {
                self.count_run(is_space);
                Token::Whitespace
            }
            found => {
                return Err(ParseError::UnexpectedChar {
                    position: start,
                    found,
                })
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    fn lex_number(&mut self) -> Token {
        let mut value: u32 = 0;
        let mut digits = 0;
        while let Some(d) = self.current_char().and_then(|c| self.digit_value(c)) {
            value = value.saturating_mul(10).saturating_add(d);
            digits += 1;
            self.advance();
        }
        Token::Number { value, digits }
    }

    fn digit_value(&self, c: char) -> Option<u32> {
        let c = if self.normalize_digits {
            normalize_digit(c)
        } else {
            c
        };
        c.to_digit(10)
    }

    /// Returns the current character without advancing.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    fn count_run<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if !predicate(ch) {
                break;
            }
            count += 1;
            self.advance();
        }
        count
    }
}
