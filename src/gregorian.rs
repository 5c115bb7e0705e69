//! Gregorian calendar and the Julian Day Number bridge.
//!
//! Dates are converted to and from a Julian Day Number (JDN), a plain count
//! of days that both calendars can be mapped onto. The formulas are the
//! closed-form proleptic Gregorian ones: no tables and no loops, only
//! truncating integer division.
//!
//! For reference, JDN 2 440 588 is 1970-01-01 and JDN 2 451 545 is 2000-01-01.

use crate::arith::{div, modulo};

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the given Gregorian year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a Gregorian month, or `None` if `month` is not 1-12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        2 if is_leap_year(year) => Some(29),
        1..=12 => Some(DAYS_IN_MONTH[(month - 1) as usize]),
        _ => None,
    }
}

/// A Gregorian calendar date.
///
/// Values are only produced by conversion, so a `GregorianDate` always names
/// a real day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl GregorianDate {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns `(year, month, day)`.
    pub fn as_tuple(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// Returns the Julian Day Number of this date.
    pub fn to_jdn(&self) -> i64 {
        gregorian_to_jdn(self.year, self.month, self.day)
    }

    /// Day of the week counted from Saturday: 0 = Saturday, 1 = Sunday, ..., 6 = Friday.
    pub fn weekday_from_saturday(&self) -> u32 {
        weekday_from_saturday(self.to_jdn())
    }

    pub(crate) fn is_valid(&self) -> bool {
        days_in_month(self.year, self.month).is_some_and(|max| (1..=max).contains(&self.day))
    }

    /// Convert to a chrono date.
    ///
    /// Returns `None` only if the year lies outside chrono's supported range.
    #[cfg(feature = "chrono")]
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<GregorianDate> for chrono::NaiveDate {
    type Error = crate::error::ConvertError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        date.to_naive_date().ok_or(crate::error::ConvertError::out_of_range(
            crate::error::Field::Year,
            date.year,
        ))
    }
}

/// Convert a Gregorian date to a Julian Day Number.
///
/// The inputs are not validated; out-of-range months or days simply produce
/// the day number the formula yields for them.
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let gy = i64::from(year);
    let gm = i64::from(month);
    let gd = i64::from(day);

    let d = div((gy + div(gm - 8, 6) + 100_100) * 1461, 4)
        + div(153 * modulo(gm + 9, 12) + 2, 5)
        + gd
        - 34_840_408;
    d - div(div(gy + 100_100 + div(gm - 8, 6), 100) * 3, 4) + 752
}

/// Convert a Julian Day Number back to a Gregorian date.
pub fn jdn_to_gregorian(jdn: i64) -> GregorianDate {
    let mut j = 4 * jdn + 139_361_631;
    j += div(div(4 * jdn + 183_187_720, 146_097) * 3, 4) * 4 - 3908;
    let i = div(modulo(j, 1461), 4) * 5 + 308;

    let gd = div(modulo(i, 153), 5) + 1;
    let gm = modulo(div(i, 153), 12) + 1;
    let gy = div(j, 1461) - 100_100 + div(8 - gm, 6);

    // gm is in 1..=12 and gd in 1..=31 by construction of the formula
    GregorianDate {
        year: gy as i32,
        month: gm as u32,
        day: gd as u32,
    }
}

pub(crate) fn weekday_from_saturday(jdn: i64) -> u32 {
    // JDN 0 was a Monday
    (jdn + 2).rem_euclid(7) as u32
}
