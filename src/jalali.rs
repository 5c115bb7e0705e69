//! Jalali (Persian solar Hijri) dates and conversion to Gregorian.
//!
//! Conversion goes through the Julian Day Number: the leap rule gives the
//! Gregorian day of Nowruz, and the position within the Jalali year is added
//! on top. Only the Jalali to Gregorian direction is provided.
//!
//! Month lengths: Farvardin through Shahrivar (1-6) have 31 days, Mehr through
//! Bahman (7-11) have 30, and Esfand (12) has 29, or 30 in a leap year.

use crate::arith::div;
use crate::cache;
use crate::error::{ConvertError, Field};
use crate::gregorian::{jdn_to_gregorian, weekday_from_saturday, GregorianDate};
use crate::leap_rule::{LeapRule, BREAKS};

/// First supported Jalali year.
pub const MIN_YEAR: i32 = 1;

/// Last supported Jalali year (the year before the final break-point).
pub const MAX_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// A validated Jalali calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: i32,
    month: u32,
    day: u32,
}

impl JalaliDate {
    /// Create a Jalali date, checking that it names a real day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ConvertError> {
        validate(year, month, day)?;
        Ok(JalaliDate { year, month, day })
    }

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
        day_number(&cache::get_or_evaluate(self.year), self.month, self.day)
    }

    /// Convert to the Gregorian calendar.
    pub fn to_gregorian(&self) -> Result<GregorianDate, ConvertError> {
        verified_gregorian(self.to_jdn())
    }

    /// Day of the week counted from Saturday (the first day of the Persian week).
    pub fn weekday_from_saturday(&self) -> u32 {
        weekday_from_saturday(self.to_jdn())
    }

    /// Returns true if this date falls in a leap year.
    pub fn is_leap_year(&self) -> bool {
        cache::get_or_evaluate(self.year).is_leap()
    }
}

/// Check that the fields name a real day and return the year's leap rule.
fn validate(year: i32, month: u32, day: u32) -> Result<LeapRule, ConvertError> {
    let rule = check_fields(year, month, day)?;
    check_day_in_month(&rule, year, month, day)?;
    Ok(rule)
}

/// Check nominal bounds and return the year's leap rule.
fn check_fields(year: i32, month: u32, day: u32) -> Result<LeapRule, ConvertError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ConvertError::out_of_range(Field::Year, year));
    }
    if !(1..=12).contains(&month) {
        return Err(ConvertError::out_of_range(Field::Month, month));
    }
    if !(1..=31).contains(&day) {
        return Err(ConvertError::out_of_range(Field::Day, day));
    }
    Ok(cache::get_or_evaluate(year))
}

fn check_day_in_month(rule: &LeapRule, year: i32, month: u32, day: u32) -> Result<(), ConvertError> {
    let max_day = match month {
        1..=6 => 31,
        7..=11 => 30,
        _ if rule.is_leap() => 30,
        _ => 29,
    };
    if day > max_day {
        tracing::trace!(year, month, day, max_day, "day beyond Jalali month length");
        return Err(ConvertError::CalendarInvalid { year, month, day });
    }
    Ok(())
}

/// Day number of `(month, day)` within the year described by `rule`.
fn day_number(rule: &LeapRule, month: u32, day: u32) -> i64 {
    let jm = i64::from(month);
    let jd = i64::from(day);
    rule.nowruz_jdn() + (jm - 1) * 31 - div(jm, 7) * (jm - 7) + jd - 1
}

/// Map a day number to Gregorian and confirm it maps back to the same number.
fn verified_gregorian(jdn: i64) -> Result<GregorianDate, ConvertError> {
    let date = jdn_to_gregorian(jdn);
    if !date.is_valid() || date.to_jdn() != jdn {
        tracing::error!(jdn, ?date, "day number failed Gregorian round trip");
        return Err(ConvertError::ArithmeticInconsistency { jdn });
    }
    Ok(date)
}

/// Convert a Jalali date to its Julian Day Number.
///
/// Fails on the same inputs as [`jalali_to_gregorian`], except that the
/// Gregorian self-check is not performed.
pub fn jalali_to_jdn(year: i32, month: u32, day: u32) -> Result<i64, ConvertError> {
    let rule = validate(year, month, day)?;
    Ok(day_number(&rule, month, day))
}

/// Convert a Jalali date to a Gregorian date.
///
/// Fails when the year is outside [`MIN_YEAR`]..=[`MAX_YEAR`], the month is
/// outside 1-12, the day is outside 1-31 or beyond the month's length, or the
/// computed day number does not survive a Gregorian round trip.
///
/// # Examples
/// ```
/// use shamsi::jalali::jalali_to_gregorian;
///
/// let g = jalali_to_gregorian(1403, 1, 1).unwrap();
/// assert_eq!(g.as_tuple(), (2024, 3, 20));
///
/// // 1400 is not a leap year
/// assert!(jalali_to_gregorian(1400, 12, 30).is_err());
/// ```
pub fn jalali_to_gregorian(year: i32, month: u32, day: u32) -> Result<GregorianDate, ConvertError> {
    let rule = validate(year, month, day)?;
    verified_gregorian(day_number(&rule, month, day))
}

/// Number of days in a Jalali month.
///
/// Esfand's length is taken from whether its 30th day converts, so it always
/// agrees with [`jalali_to_gregorian`].
pub fn month_length(year: i32, month: u32) -> Result<u32, ConvertError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ConvertError::out_of_range(Field::Year, year));
    }
    match month {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 if jalali_to_gregorian(year, 12, 30).is_ok() => Ok(30),
        12 => Ok(29),
        _ => Err(ConvertError::out_of_range(Field::Month, month)),
    }
}

/// Returns true if the Jalali year has 366 days.
pub fn is_leap_year(year: i32) -> Result<bool, ConvertError> {
    Ok(month_length(year, 12)? == 30)
}
