//! Conversions between Gregorian calendar dates and Rata Die (R.D.) day numbers.
//!
//! Two conventions are provided:
//!
//! - [`historical`]: the calendar as it was used in Britain. There is no year
//!   zero, dates up to September 2, 1752 are Julian, and the following day is
//!   September 14, 1752.
//! - [`proleptic`]: the Gregorian rule applied uniformly to every year,
//!   including year 0 and negative years.
//!
//! ```
//! use rata_die::{Month, RataDie, from_rd, proleptic_to_rd, to_rd};
//!
//! assert_eq!(to_rd(1995, Month::DECEMBER, 17), Ok(RataDie::new(728_644)));
//! assert_eq!(from_rd(RataDie::new(737_553)).to_tuple(), (2020, 5, 8));
//! assert_eq!(proleptic_to_rd(1, Month::JANUARY, 1), Ok(RataDie::new(1)));
//! ```

/// Returns `$err` from the enclosing function unless `$condition` holds.
/// Defined ahead of the module list so every module sees it.
macro_rules! ensure {
    ($condition:expr, $err:expr $(,)?) => {
        if !$condition {
            let err = $err;
            #[cfg(feature = "log")]
            log::debug!("rejecting date: {err}");
            return Err(err);
        }
    };
}

#[cfg(feature = "chrono")]
pub mod adapter;
mod consts;
pub mod historical;
mod julian;
mod prelude;
pub mod primitives;
pub mod proleptic;
mod types;

pub use consts::*;
pub use historical::{from_rd, to_rd};
pub use primitives::{days_in_month, is_leap_year};
pub use proleptic::{proleptic_from_rd, proleptic_to_rd};
pub use types::{CalendarDate, Month, RataDie};

use serde::{Deserialize, Serialize};

/// Error type for date conversions. Every variant is a caller input error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month outside 1..=12.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day outside the month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// Year 0 given to the historical convention, which has none.
    #[error("Year 0 does not exist in the historical calendar")]
    YearZero,

    /// One of the eleven dates dropped by the 1752 calendar switch.
    #[error("1752-09-{day:02} was skipped in the switch to the Gregorian calendar")]
    SkippedDate { day: u8 },

    /// The date's day number does not fit in an R.D. value.
    #[error("Date {year}-{month:02}-{day:02} is outside the supported R.D. range")]
    OutOfRange { year: i32, month: u8, day: u8 },
}

/// Which numbering a [`CalendarDate`] follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// No year zero, Julian before September 14, 1752.
    #[default]
    Historical,
    /// Gregorian rule for every year, year zero included.
    Proleptic,
}

impl Convention {
    /// Converts `date` to its day number.
    ///
    /// # Errors
    /// See [`historical::to_rd`] and [`proleptic::proleptic_to_rd`].
    pub fn to_rd(self, date: CalendarDate) -> Result<RataDie, DateError> {
        match self {
            Self::Historical => historical::to_rd(date.year(), date.month(), date.day()),
            Self::Proleptic => proleptic::proleptic_to_rd(date.year(), date.month(), date.day()),
        }
    }

    /// Converts a day number to a date.
    pub fn from_rd(self, rd: RataDie) -> CalendarDate {
        match self {
            Self::Historical => historical::from_rd(rd),
            Self::Proleptic => proleptic::proleptic_from_rd(rd),
        }
    }

    /// Month length under this convention
    pub const fn days_in_month(self, month: Month, year: i32) -> u8 {
        match self {
            Self::Historical => historical::days_in_month(month, year),
            Self::Proleptic => primitives::days_in_month(month, year),
        }
    }

    /// Whether `date` exists under this convention
    pub const fn is_valid(self, date: CalendarDate) -> bool {
        match self {
            Self::Historical => historical::is_valid(date.year(), date.month(), date.day()),
            Self::Proleptic => proleptic::is_valid(date.year(), date.month(), date.day()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, rd};

    #[test]
    fn test_reference_vectors() {
        assert_eq!(to_rd(1995, Month::DECEMBER, 17), Ok(rd(728_644)));
        assert_eq!(from_rd(rd(737_553)), date(2020, 5, 8));
        assert_eq!(proleptic_to_rd(1, Month::JANUARY, 1), Ok(rd(1)));
        assert_eq!(proleptic_from_rd(rd(-730)), date(-1, 1, 1));
    }

    #[test]
    fn test_epochs_differ_by_two_days() {
        let historical = to_rd(1, Month::JANUARY, 1).unwrap();
        let proleptic = proleptic_to_rd(1, Month::JANUARY, 1).unwrap();
        assert_eq!(historical, rd(-1));
        assert_eq!(proleptic - historical, 2);
    }

    #[test]
    fn test_proleptic_year_zero() {
        assert_eq!(proleptic_to_rd(0, Month::DECEMBER, 31), Ok(rd(0)));
        assert!(is_leap_year(0));
    }

    #[test]
    fn test_transition_gap() {
        let before = to_rd(1752, Month::SEPTEMBER, 2).unwrap();
        let after = to_rd(1752, Month::SEPTEMBER, 14).unwrap();
        assert_eq!(before.checked_add(1), Some(after));
    }

    #[test]
    fn test_conventions_agree_after_transition() {
        for value in (TRANSITION_RD..=TRANSITION_RD + 200_000).step_by(13) {
            assert_eq!(from_rd(rd(value)), proleptic_from_rd(rd(value)));
        }
    }

    #[test]
    fn test_convention_dispatch() {
        let first = date(1, 1, 1);
        assert_eq!(Convention::Historical.to_rd(first), Ok(rd(-1)));
        assert_eq!(Convention::Proleptic.to_rd(first), Ok(rd(1)));
        assert_eq!(first.to_rd(Convention::Proleptic), Ok(rd(1)));

        assert_eq!(Convention::Historical.from_rd(rd(0)), date(1, 1, 2));
        assert_eq!(Convention::Proleptic.from_rd(rd(0)), date(0, 12, 31));

        let year_zero = date(0, 2, 29);
        assert!(Convention::Proleptic.is_valid(year_zero));
        assert!(!Convention::Historical.is_valid(year_zero));
        assert_eq!(Convention::Historical.to_rd(year_zero), Err(DateError::YearZero));

        let skipped = date(1752, 9, 10);
        assert!(Convention::Proleptic.is_valid(skipped));
        assert!(!Convention::Historical.is_valid(skipped));

        assert_eq!(Convention::Historical.days_in_month(Month::FEBRUARY, 1700), 29);
        assert_eq!(Convention::Proleptic.days_in_month(Month::FEBRUARY, 1700), 28);
    }

    #[test]
    fn test_convention_serde() {
        assert_eq!(serde_json::to_string(&Convention::Historical).unwrap(), r#""historical""#);
        let parsed: Convention = serde_json::from_str(r#""proleptic""#).unwrap();
        assert_eq!(parsed, Convention::Proleptic);
        assert_eq!(Convention::default(), Convention::Historical);
    }

    #[test]
    fn test_forward_conversions_are_monotonic() {
        for convention in [Convention::Historical, Convention::Proleptic] {
            let mut previous: Option<RataDie> = None;
            for year in -3..=3 {
                for month in Month::ALL {
                    for day in 1..=convention.days_in_month(month, year) {
                        let civil = CalendarDate::new(year, month, day);
                        if !convention.is_valid(civil) {
                            continue;
                        }
                        let current = convention.to_rd(civil).unwrap();
                        if let Some(previous) = previous {
                            assert_eq!(current - previous, 1, "{convention:?} {civil}");
                        }
                        previous = Some(current);
                    }
                }
            }
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DateError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(
            DateError::InvalidDay {
                year:  2023,
                month: 2,
                day:   29,
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
        assert_eq!(
            DateError::SkippedDate { day: 5 }.to_string(),
            "1752-09-05 was skipped in the switch to the Gregorian calendar"
        );
        assert!(DateError::YearZero.to_string().contains("Year 0"));
    }
}
