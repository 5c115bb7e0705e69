//! Local date-time values produced from Jalali input.

use std::fmt;

use crate::error::{ConvertError, Field};
use crate::gregorian::GregorianDate;
use crate::jalali::{jalali_to_gregorian, month_length};

/// Highest valid hour.
pub const MAX_HOUR: u32 = 23;

/// Highest valid minute.
pub const MAX_MINUTE: u32 = 59;

/// A Gregorian date with an hour and minute, in local calendar fields.
///
/// There is no time zone attached; the fields are whatever the caller's
/// local calendar says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    date: GregorianDate,
    hour: u32,
    minute: u32,
}

impl LocalDateTime {
    /// Build from Jalali date fields and a time of day.
    ///
    /// The hour and minute are checked before any calendar work is done.
    pub fn from_jalali(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, ConvertError> {
        if hour > MAX_HOUR {
            return Err(ConvertError::out_of_range(Field::Hour, hour));
        }
        if minute > MAX_MINUTE {
            return Err(ConvertError::out_of_range(Field::Minute, minute));
        }
        let date = jalali_to_gregorian(year, month, day)?;
        Ok(LocalDateTime { date, hour, minute })
    }

    /// Build from Jalali fields, clamping day, hour, and minute into range.
    ///
    /// The day is pulled into `1..=month_length(year, month)`, so picking the
    /// 31st of a 30-day month lands on the 30th. Year and month are not
    /// clamped and must already be valid.
    pub fn from_jalali_clamped(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, ConvertError> {
        let max_day = month_length(year, month)?;
        Self::from_jalali(
            year,
            month,
            day.clamp(1, max_day),
            hour.min(MAX_HOUR),
            minute.min(MAX_MINUTE),
        )
    }

    pub fn date(&self) -> GregorianDate {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns `(year, month, day, hour, minute)`.
    pub fn as_tuple(&self) -> (i32, u32, u32, u32, u32) {
        let (y, m, d) = self.date.as_tuple();
        (y, m, d, self.hour, self.minute)
    }

    /// Convert to a chrono date-time with zero seconds.
    #[cfg(feature = "chrono")]
    pub fn to_naive_datetime(&self) -> Option<chrono::NaiveDateTime> {
        self.date.to_naive_date()?.and_hms_opt(self.hour, self.minute, 0)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.date.as_tuple();
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            y, m, d, self.hour, self.minute
        )
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<LocalDateTime> for chrono::NaiveDateTime {
    type Error = ConvertError;

    fn try_from(value: LocalDateTime) -> Result<Self, Self::Error> {
        value
            .to_naive_datetime()
            .ok_or(ConvertError::out_of_range(Field::Year, value.date.year()))
    }
}
