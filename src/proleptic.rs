//! Proleptic Gregorian conversions: the Gregorian rule applied to every year,
//! with an ordinary year 0 and no transition gap.

use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS, DAYS_PER_YEAR, GREGORIAN_CYCLE,
    GREGORIAN_EPOCH, LEAP_YEAR_CYCLE, MIN_DAY,
};
use crate::primitives::{
    days_before_month, days_in_month, is_leap_year, modulo, month_from_prior_days, month_offset, quotient,
};
use crate::types::{CalendarDate, Month, RataDie};
use crate::DateError;

/// Day number of a Gregorian date, counting years as given (year 0 included).
pub(crate) const fn fixed_from_gregorian(date: CalendarDate) -> i64 {
    let elapsed = date.year() as i64 - 1;
    GREGORIAN_EPOCH as i64 - 1
        + DAYS_PER_YEAR * elapsed
        + quotient(elapsed, LEAP_YEAR_CYCLE)
        - quotient(elapsed, CENTURY_CYCLE)
        + quotient(elapsed, GREGORIAN_CYCLE)
        + days_before_month(date.month())
        + month_offset(date.month(), is_leap_year(date.year()))
        + date.day() as i64
}

/// Gregorian year containing a day number.
pub(crate) const fn gregorian_year_from_fixed(rd: i64) -> i64 {
    let d0 = rd - GREGORIAN_EPOCH as i64;
    let n400 = quotient(d0, DAYS_PER_400_YEARS);
    let d1 = modulo(d0, DAYS_PER_400_YEARS);
    let n100 = quotient(d1, DAYS_PER_100_YEARS);
    let d2 = modulo(d1, DAYS_PER_100_YEARS);
    let n4 = quotient(d2, DAYS_PER_4_YEARS);
    let d3 = modulo(d2, DAYS_PER_4_YEARS);
    let n1 = quotient(d3, DAYS_PER_YEAR);
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;

    // four whole centuries or four whole years means the leap day closing the
    // cycle, December 31 of `year` itself
    if n100 == 4 || n1 == 4 { year } else { year + 1 }
}

/// Gregorian date of a day number.
pub(crate) const fn gregorian_from_fixed(rd: i64) -> CalendarDate {
    // an i32 day count stays well inside the i32 year range
    #[allow(clippy::cast_possible_truncation)]
    let year = gregorian_year_from_fixed(rd) as i32;

    let prior_days = rd - fixed_from_gregorian(CalendarDate::first_of(year, Month::JANUARY));
    let after_february = rd >= fixed_from_gregorian(CalendarDate::first_of(year, Month::MARCH));
    let month = month_from_prior_days(prior_days, is_leap_year(year), after_february);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = (rd - fixed_from_gregorian(CalendarDate::first_of(year, month)) + 1) as u8;

    CalendarDate::new(year, month, day)
}

/// Converts a proleptic Gregorian date to its R.D. number.
///
/// Any year is accepted, including 0 and negative years; `ProlepticToRD(1, January, 1)` is 1.
///
/// # Errors
/// Returns `DateError::InvalidDay` if `day` is not in the month, and
/// `DateError::OutOfRange` if the day number does not fit an `i32`.
pub fn proleptic_to_rd(year: i32, month: Month, day: u8) -> Result<RataDie, DateError> {
    ensure!(
        (MIN_DAY..=days_in_month(month, year)).contains(&day),
        DateError::InvalidDay {
            year,
            month: month.get(),
            day,
        }
    );

    let rd = fixed_from_gregorian(CalendarDate::new(year, month, day));
    RataDie::from_wide(rd).ok_or(DateError::OutOfRange {
        year,
        month: month.get(),
        day,
    })
}

/// Converts an R.D. number to a proleptic Gregorian date. Every day number maps to a date.
pub fn proleptic_from_rd(rd: RataDie) -> CalendarDate {
    gregorian_from_fixed(i64::from(rd.get()))
}

/// Whether `(year, month, day)` names a real proleptic Gregorian date.
pub const fn is_valid(year: i32, month: Month, day: u8) -> bool {
    day >= MIN_DAY && day <= days_in_month(month, year)
}
