//! Jalali leap-rule evaluation.
//!
//! The Jalali calendar intercalates a leap day roughly every four years, but
//! the four-year rhythm is organised into 33-year cycles (eight leaps per
//! cycle) whose phase shifts at a small set of historical years. Those years
//! are listed in [`BREAKS`]. Given a Jalali year, [`evaluate`] walks the table
//! to count the leap days accumulated so far, then compares that against the
//! Gregorian leap count to find the day of March on which the year's Nowruz
//! (1 Farvardin) falls.
//!
//! All arithmetic uses the truncating primitives in [`crate::arith`].

use crate::arith::{div, modulo};
use crate::gregorian::gregorian_to_jdn;

/// Jalali years at which the 33-year leap cycle's phase resets.
///
/// Must stay strictly ascending. The first entry is only a starting point for
/// the walk; years are supported from 1 up to (excluding) the last entry.
pub const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Offset between a Jalali year and the Gregorian year in which it begins.
const GREGORIAN_OFFSET: i64 = 621;

/// Leap-day accumulator value at the first break-point.
const LEAP_SEED: i64 = -14;

/// Result of evaluating the leap rule for one Jalali year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeapRule {
    /// Years since the last leap year, in 0..=4. 0 means this year is leap;
    /// 4 marks the five-year gap that closes a 33-year cycle.
    pub leap: i32,
    /// Gregorian year in which this Jalali year begins.
    pub gregorian_year: i32,
    /// Day of Gregorian March on which Nowruz falls.
    pub march: i32,
    /// Jalali leap days accumulated up to this year, relative to the table seed.
    pub leap_days: i32,
}

impl LeapRule {
    /// Returns true if the Jalali year has 366 days.
    pub fn is_leap(&self) -> bool {
        self.leap == 0
    }

    /// Julian Day Number of 1 Farvardin of this year.
    pub fn nowruz_jdn(&self) -> i64 {
        gregorian_to_jdn(self.gregorian_year, 3, self.march as u32)
    }
}

/// Evaluate the leap rule for Jalali year `jy`.
///
/// The caller is responsible for keeping `jy` inside the table range; outside
/// it the formulas still produce numbers but they carry no calendrical meaning.
pub fn evaluate(jy: i32) -> LeapRule {
    let jy = i64::from(jy);
    let gy = jy + GREGORIAN_OFFSET;

    let mut leap_j = LEAP_SEED;
    let mut jp = i64::from(BREAKS[0]);
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        let jm = i64::from(jm);
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += div(jump, 33) * 8 + div(modulo(jump, 33), 4);
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += div(n, 33) * 8 + div(modulo(n, 33) + 3, 4);
    // A break-point landing exactly on a would-be leap year
    if modulo(jump, 33) == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = div(gy, 4) - div((div(gy, 100) + 1) * 3, 4) - 150;
    let march = 20 + leap_j - leap_g;

    // Close to the next break-point the cycle phase is measured from it instead
    if jump - n < 6 {
        n = n - jump + div(jump + 4, 33) * 33;
    }
    let mut leap = modulo(modulo(n + 1, 33) - 1, 4);
    if leap == -1 {
        leap = 4;
    }

    LeapRule {
        leap: leap as i32,
        gregorian_year: gy as i32,
        march: march as i32,
        leap_days: leap_j as i32,
    }
}
