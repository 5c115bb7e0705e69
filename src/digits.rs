//! Digit glyph normalization.
//!
//! Persian keyboards produce Extended Arabic-Indic digits (U+06F0..U+06F9) and
//! Arabic keyboards produce Arabic-Indic digits (U+0660..U+0669). Both are
//! mapped to ASCII before the date-time grammar is applied.

use std::borrow::Cow;

const PERSIAN_ZERO: u32 = 0x06F0;
const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// Map a single Persian or Arabic-Indic digit to its ASCII counterpart.
///
/// Any other character is returned unchanged.
pub fn normalize_digit(c: char) -> char {
    let code = c as u32;
    let offset = match code {
        0x06F0..=0x06F9 => code - PERSIAN_ZERO,
        0x0660..=0x0669 => code - ARABIC_INDIC_ZERO,
        _ => return c,
    };
    char::from_digit(offset, 10).unwrap_or(c)
}

fn is_foreign_digit(c: char) -> bool {
    matches!(c as u32, 0x06F0..=0x06F9 | 0x0660..=0x0669)
}

/// Replace every Persian and Arabic-Indic digit in `input` with ASCII.
///
/// Borrows the input when there is nothing to replace.
///
/// # Examples
/// ```
/// use shamsi::digits::normalize_digits;
///
/// assert_eq!(normalize_digits("۱۴۰۳/۰۱/۰۱"), "1403/01/01");
/// assert_eq!(normalize_digits("٢٠٢٤"), "2024");
/// assert_eq!(normalize_digits("1403/01/01"), "1403/01/01");
/// ```
pub fn normalize_digits(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_foreign_digit) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.chars().map(normalize_digit).collect())
}
