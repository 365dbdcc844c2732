//! Bridges to `chrono` date and date-time values. Only the calendar date is
//! used; any time of day is dropped.

use chrono::{Datelike, NaiveDate};

use crate::types::{Month, RataDie};
use crate::{DateError, historical, proleptic};

fn components<D: Datelike>(date: &D) -> Result<(i32, Month, u8), DateError> {
    let year = date.year();
    let month = Month::ALL[date.month0() as usize];
    let day = u8::try_from(date.day()).map_err(|_| DateError::InvalidDay {
        year,
        month: month.get(),
        day: u8::MAX,
    })?;
    Ok((year, month, day))
}

/// Converts the date part of `date` through the historical calendar, the way
/// a caller holding a date-time value would look up its day number.
///
/// chrono counts years astronomically, so its year 0 is rejected here.
///
/// # Errors
/// Returns the errors of [`historical::to_rd`].
pub fn date_to_rd<D: Datelike>(date: &D) -> Result<RataDie, DateError> {
    let (year, month, day) = components(date)?;
    historical::to_rd(year, month, day)
}

/// Converts the date part of `date` through the proleptic Gregorian calendar,
/// which is the calendar chrono itself uses.
///
/// # Errors
/// Returns the errors of [`proleptic::proleptic_to_rd`].
pub fn proleptic_date_to_rd<D: Datelike>(date: &D) -> Result<RataDie, DateError> {
    let (year, month, day) = components(date)?;
    proleptic::proleptic_to_rd(year, month, day)
}

/// Proleptic Gregorian `NaiveDate` for a day number, or `None` outside chrono's range.
pub fn rd_to_naive_date(rd: RataDie) -> Option<NaiveDate> {
    let civil = proleptic::proleptic_from_rd(rd);
    NaiveDate::from_ymd_opt(civil.year(), u32::from(civil.month().get()), u32::from(civil.day()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::rd;
    use chrono::NaiveDateTime;

    fn naive(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_date_to_rd() {
        assert_eq!(date_to_rd(&naive(2014, 2, 19)), Ok(rd(735_283)));
        assert_eq!(date_to_rd(&naive(1995, 12, 17)), Ok(rd(728_644)));
    }

    #[test]
    fn test_date_to_rd_ignores_time_of_day() {
        let midnight = naive(2014, 2, 19).and_hms_opt(0, 0, 0).unwrap();
        let evening: NaiveDateTime = naive(2014, 2, 19).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(date_to_rd(&midnight), date_to_rd(&evening));
        assert_eq!(date_to_rd(&evening), Ok(rd(735_283)));
    }

    #[test]
    fn test_date_to_rd_uses_historical_rules() {
        assert_eq!(
            date_to_rd(&naive(1752, 9, 5)),
            Err(DateError::SkippedDate { day: 5 })
        );
        assert_eq!(date_to_rd(&naive(0, 6, 1)), Err(DateError::YearZero));
    }

    #[test]
    fn test_proleptic_date_to_rd_matches_chrono() {
        for date in [naive(1, 1, 1), naive(0, 12, 31), naive(1752, 9, 5), naive(-44, 3, 15), naive(2020, 5, 8)] {
            assert_eq!(proleptic_date_to_rd(&date), Ok(rd(date.num_days_from_ce())));
        }
    }

    #[test]
    fn test_rd_to_naive_date() {
        assert_eq!(rd_to_naive_date(rd(737_553)), Some(naive(2020, 5, 8)));
        assert_eq!(rd_to_naive_date(rd(0)), Some(naive(0, 12, 31)));
        assert_eq!(rd_to_naive_date(RataDie::MAX), None);
    }
}
