//! Truncating integer division primitives.
//!
//! The Jalali leap-rule evaluator and both day-number bridges are written in
//! terms of division that rounds toward zero. Rust's `/` and `%` on signed
//! integers already truncate, but `div_euclid`/`rem_euclid` (and floor division
//! in general) do not, and give different answers for negative operands. Every
//! calendar formula in this crate goes through these two functions so the
//! rounding mode is stated in one place.

/// Integer division rounded toward zero.
#[inline]
pub(crate) const fn div(a: i64, b: i64) -> i64 {
    a / b
}

/// Remainder matching [`div`]: `a - div(a, b) * b`. Takes the sign of `a`.
#[inline]
pub(crate) const fn modulo(a: i64, b: i64) -> i64 {
    a - div(a, b) * b
}
