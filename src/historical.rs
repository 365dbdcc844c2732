//! Dates as they were actually written in Britain and its colonies.
//!
//! There is no year zero: year -1 (1 BCE) is followed by year 1. Dates up to
//! and including September 2, 1752 are Julian; the next day was proclaimed
//! September 14, 1752 and every later date is Gregorian. Day numbers stay
//! contiguous across the switch, so the eleven labels September 3..=13, 1752
//! have no R.D. number at all.

use crate::consts::{FIRST_GREGORIAN_DAY, LAST_JULIAN_DAY, MIN_DAY, SEPTEMBER, TRANSITION_RD, TRANSITION_YEAR};
use crate::julian::{fixed_from_julian, julian_from_fixed};
use crate::proleptic::{fixed_from_gregorian, gregorian_from_fixed};
use crate::types::{CalendarDate, Month, RataDie};
use crate::{DateError, julian, primitives};

/// Whether the date falls on or after September 14, 1752.
const fn is_gregorian(year: i32, month: Month, day: u8) -> bool {
    year > TRANSITION_YEAR
        || (year == TRANSITION_YEAR
            && (month.get() > SEPTEMBER || (month.get() == SEPTEMBER && day >= FIRST_GREGORIAN_DAY)))
}

/// Returns true if `year` had a February 29: the Julian rule before 1752,
/// the Gregorian rule from then on. 1752 is a leap year under both.
pub const fn is_leap_year(year: i32) -> bool {
    if year < TRANSITION_YEAR {
        julian::is_leap_year(year)
    } else {
        primitives::is_leap_year(year)
    }
}

/// Length of `month` in `year` as the calendar of the time had it.
///
/// September 1752 reports 30 days even though only 19 of them happened;
/// use [`is_skipped`] to rule out the missing labels.
pub const fn days_in_month(month: Month, year: i32) -> u8 {
    if year < TRANSITION_YEAR {
        julian::days_in_month(month, year)
    } else {
        primitives::days_in_month(month, year)
    }
}

/// Whether the date is one of September 3..=13, 1752, which never occurred.
pub const fn is_skipped(year: i32, month: Month, day: u8) -> bool {
    year == TRANSITION_YEAR && month.get() == SEPTEMBER && day > LAST_JULIAN_DAY && day < FIRST_GREGORIAN_DAY
}

/// Whether [`to_rd`] accepts the date, leaving aside the `i32` range of R.D. numbers.
pub const fn is_valid(year: i32, month: Month, day: u8) -> bool {
    year != 0 && day >= MIN_DAY && day <= days_in_month(month, year) && !is_skipped(year, month, day)
}

/// Converts a historical date to its R.D. number.
///
/// `ToRD(1, January, 1)` is -1 and `ToRD(1752, September, 2) + 1 == ToRD(1752, September, 14)`.
///
/// # Errors
/// Returns `DateError::YearZero` for year 0, `DateError::InvalidDay` if `day`
/// is not in the month, `DateError::SkippedDate` for September 3..=13, 1752,
/// and `DateError::OutOfRange` if the day number does not fit an `i32`.
pub fn to_rd(year: i32, month: Month, day: u8) -> Result<RataDie, DateError> {
    ensure!(year != 0, DateError::YearZero);
    ensure!(
        (MIN_DAY..=days_in_month(month, year)).contains(&day),
        DateError::InvalidDay {
            year,
            month: month.get(),
            day,
        }
    );
    ensure!(!is_skipped(year, month, day), DateError::SkippedDate { day });

    let date = CalendarDate::new(year, month, day);
    let rd = if is_gregorian(year, month, day) {
        fixed_from_gregorian(date)
    } else {
        fixed_from_julian(date)
    };
    RataDie::from_wide(rd).ok_or(DateError::OutOfRange {
        year,
        month: month.get(),
        day,
    })
}

/// Converts an R.D. number to a historical date. Every day number maps to a
/// date, never to year 0 or a skipped September 1752 label.
pub fn from_rd(rd: RataDie) -> CalendarDate {
    let rd = i64::from(rd.get());
    if rd >= i64::from(TRANSITION_RD) {
        gregorian_from_fixed(rd)
    } else {
        julian_from_fixed(rd)
    }
}
