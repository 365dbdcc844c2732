//! Leap years and month lengths under the Gregorian rule, shared by both
//! converters, plus the floor arithmetic the conversions are written in.

use crate::consts::{CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE};
use crate::types::Month;

/// Floor division. Every divisor in this crate is positive, where Euclidean
/// and floor division agree.
#[inline]
pub(crate) const fn quotient(x: i64, y: i64) -> i64 {
    debug_assert!(y > 0);
    x.div_euclid(y)
}

/// Floor modulo, always in `0..y` for positive `y`.
#[inline]
pub(crate) const fn modulo(x: i64, y: i64) -> i64 {
    debug_assert!(y > 0);
    x.rem_euclid(y)
}

/// Returns true if `year` is a leap year under the Gregorian rule.
///
/// Negative years and year 0 follow the same rule through floor modulo,
/// so year 0 and year -4 are leap years and year -1 is not.
pub const fn is_leap_year(year: i32) -> bool {
    let year = year as i64;
    modulo(year, LEAP_YEAR_CYCLE) == 0
        && (modulo(year, CENTURY_CYCLE) != 0 || modulo(year, GREGORIAN_CYCLE) == 0)
}

/// Number of days in `month` of `year` under the Gregorian rule.
pub const fn days_in_month(month: Month, year: i32) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Days elapsed in the year before the first of `month`, for a 28-day February.
/// Callers add the leap-day correction.
#[inline]
pub(crate) const fn days_before_month(month: Month) -> i64 {
    quotient(367 * month.get() as i64 - 362, 12)
}

/// Correction to [`days_before_month`]: zero through February, then -1 in a
/// leap year and -2 otherwise.
#[inline]
pub(crate) const fn month_offset(month: Month, leap: bool) -> i64 {
    if month.get() <= FEBRUARY {
        0
    } else if leap {
        -1
    } else {
        -2
    }
}

/// Month containing the day `prior_days` days after January 1.
/// `leap` and `after_february` describe the year and whether the day is on or
/// after March 1.
pub(crate) const fn month_from_prior_days(prior_days: i64, leap: bool, after_february: bool) -> Month {
    let correction = if !after_february {
        0
    } else if leap {
        1
    } else {
        2
    };
    Month::from_ordinal(quotient(12 * (prior_days + correction) + 373, 367))
}
