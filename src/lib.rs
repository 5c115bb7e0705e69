//! shamsi - Jalali (Persian solar Hijri) to Gregorian conversion
//!
//! This crate converts Jalali calendar dates to Gregorian using the
//! break-point driven 33-year leap rule, and parses constrained Jalali
//! date-time text (`1403/01/01 14:30`, Persian digits accepted) into local
//! Gregorian date-times. Every failure is reported as a `Result` error;
//! nothing panics on bad input.

pub mod digits;
pub mod error;
pub mod gregorian;
pub mod jalali;
pub mod leap_rule;
pub mod options;

pub mod datetime;

mod arith;
mod cache;
pub mod parser;

pub use datetime::LocalDateTime;
pub use error::{ConvertError, ErrorKind, Field, ParseError};
pub use gregorian::GregorianDate;
pub use jalali::{is_leap_year, jalali_to_gregorian, month_length, JalaliDate};
pub use options::ParseOptions;

/// Parse Jalali date-time text using the given options.
///
/// # Examples
/// ```
/// use shamsi::{parse_jalali_datetime, ParseOptions};
///
/// let opts = ParseOptions::default();
/// let dt = parse_jalali_datetime("۱۴۰۳/۰۱/۰۱ 14:30", &opts).unwrap();
/// assert_eq!(dt.as_tuple(), (2024, 3, 20, 14, 30));
/// ```
pub fn parse_jalali_datetime(
    input: &str,
    opts: &ParseOptions,
) -> Result<LocalDateTime, ParseError> {
    parser::parse_with_options(input, opts)
}

/// Parse Jalali date-time text using default options.
pub fn parse_jalali_datetime_default(input: &str) -> Result<LocalDateTime, ParseError> {
    parser::parse(input)
}
