/*!
A collection of calendar related utility functions.

These operate on plain `i64` values. Years in this crate span the full range
of absolute time, which is far beyond what a narrower integer could hold.
*/

use crate::util::t::DAYS_BEFORE;

/// Returns true if and only if the given year is a leap year.
///
/// A leap year is a year with 366 days. Typical years have 365 days. A year
/// is a leap year when it is divisible by 4, except for years divisible by
/// 100 that aren't also divisible by 400.
#[inline]
pub(crate) const fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given year and 1-based month.
///
/// This correctly returns `29` when the year is a leap year and the month is
/// February. The month must be in `1..=12`.
#[inline]
pub(crate) fn days_in_month(year: i64, month: i64) -> i64 {
    debug_assert!((1..=12).contains(&month), "month {month} out of range");
    if month == 2 && is_leap_year(year) {
        29
    } else {
        let month = month as usize;
        DAYS_BEFORE[month] - DAYS_BEFORE[month - 1]
    }
}

/// Normalizes `lo` into `[0, base)` by carrying whole multiples of `base`
/// into `hi`.
///
/// This is how out-of-range calendar fields are resolved: a minute of `61`
/// becomes one hour and one minute, a month of `0` becomes December of the
/// previous year and so on. `base` must be positive.
///
/// The carry into `hi` wraps on overflow. Callers feed the result into
/// wrapping calendar arithmetic, where only the value modulo `2^64` matters.
#[inline]
pub(crate) fn norm(hi: i64, lo: i64, base: i64) -> (i64, i64) {
    debug_assert!(base > 0);
    (hi.wrapping_add(lo.div_euclid(base)), lo.rem_euclid(base))
}
