//! Parsing options and configuration.

/// Options for parsing Jalali date-time text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Map Persian and Arabic-Indic digits to ASCII before parsing.
    pub normalize_digits: bool,
    /// Accept an optional `HH[:MM]` after the date.
    pub allow_time: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            normalize_digits: true,
            allow_time: true,
        }
    }
}

impl ParseOptions {
    /// Options for date-only fields: time of day is rejected.
    pub fn date_only() -> Self {
        ParseOptions {
            allow_time: false,
            ..Self::default()
        }
    }
}
