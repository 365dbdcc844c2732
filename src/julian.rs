//! Julian calendar day counts, as used for historical dates before the 1752
//! switch. Years have no zero: 1 BCE is year -1 and is a leap year.

use crate::consts::{
    DAYS_IN_MONTH, DAYS_PER_4_YEARS, DAYS_PER_YEAR, FEBRUARY, FEBRUARY_DAYS_LEAP, JULIAN_EPOCH, LEAP_YEAR_CYCLE,
};
use crate::primitives::{days_before_month, modulo, month_from_prior_days, month_offset, quotient};
use crate::types::{CalendarDate, Month};

/// Julian leap years: every fourth year, counted so that 1 BCE, 5 BCE, ...
/// are leap years.
pub(crate) const fn is_leap_year(year: i32) -> bool {
    let residue = modulo(year as i64, LEAP_YEAR_CYCLE);
    if year > 0 { residue == 0 } else { residue == 3 }
}

pub(crate) const fn days_in_month(month: Month, year: i32) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Day number of a Julian date. `year` must not be 0.
pub(crate) const fn fixed_from_julian(date: CalendarDate) -> i64 {
    let year = date.year() as i64;
    // shift negative years up by one so 1 BCE sits directly before 1 CE
    let elapsed = if year < 0 { year } else { year - 1 };
    JULIAN_EPOCH as i64 - 1
        + DAYS_PER_YEAR * elapsed
        + quotient(elapsed, LEAP_YEAR_CYCLE)
        + days_before_month(date.month())
        + month_offset(date.month(), is_leap_year(date.year()))
        + date.day() as i64
}

/// Julian date of a day number.
pub(crate) const fn julian_from_fixed(rd: i64) -> CalendarDate {
    let approx = quotient(4 * (rd - JULIAN_EPOCH as i64) + 1464, DAYS_PER_4_YEARS);
    let year = if approx <= 0 { approx - 1 } else { approx };
    // an i32 day count stays well inside the i32 year range
    #[allow(clippy::cast_possible_truncation)]
    let year = year as i32;

    let prior_days = rd - fixed_from_julian(CalendarDate::first_of(year, Month::JANUARY));
    let after_february = rd >= fixed_from_julian(CalendarDate::first_of(year, Month::MARCH));
    let month = month_from_prior_days(prior_days, is_leap_year(year), after_february);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = (rd - fixed_from_julian(CalendarDate::first_of(year, month)) + 1) as u8;

    CalendarDate::new(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_julian_leap_years() {
        assert!(is_leap_year(4));
        assert!(is_leap_year(1700));
        assert!(is_leap_year(1500));
        assert!(!is_leap_year(1751));
        assert!(is_leap_year(-1));
        assert!(is_leap_year(-5));
        assert!(!is_leap_year(-4));
        assert!(!is_leap_year(-2));
    }

    #[test]
    fn test_julian_february() {
        assert_eq!(days_in_month(Month::FEBRUARY, 1700), 29);
        assert_eq!(days_in_month(Month::FEBRUARY, -1), 29);
        assert_eq!(days_in_month(Month::FEBRUARY, 1751), 28);
        assert_eq!(days_in_month(Month::MARCH, 1751), 31);
    }

    #[test]
    fn test_epoch() {
        assert_eq!(fixed_from_julian(date(1, 1, 1)), i64::from(JULIAN_EPOCH));
        assert_eq!(julian_from_fixed(i64::from(JULIAN_EPOCH)), date(1, 1, 1));
    }

    #[test]
    fn test_year_before_epoch() {
        assert_eq!(fixed_from_julian(date(-1, 12, 31)), -2);
        assert_eq!(fixed_from_julian(date(-1, 1, 1)), -367);
        assert_eq!(julian_from_fixed(-367), date(-1, 1, 1));
        assert_eq!(julian_from_fixed(-368), date(-2, 12, 31));
    }

    #[test]
    fn test_round_trip_over_range() {
        for rd in -400_000..=640_000 {
            let julian = julian_from_fixed(rd);
            assert_ne!(julian.year(), 0, "R.D. {rd} produced year zero");
            assert_eq!(fixed_from_julian(julian), rd, "R.D. {rd} -> {julian}");
        }
    }
}
