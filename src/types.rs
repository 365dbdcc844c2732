use crate::DateError;
use crate::consts::{DECEMBER, JANUARY, MAX_MONTH, MIN_DAY};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::ops::Sub;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

const fn known_month(value: u8) -> Month {
    match NonZeroU8::new(value) {
        Some(month) => Month(month),
        None => panic!("month ordinals start at 1"),
    }
}

impl Month {
    pub const JANUARY: Self = known_month(JANUARY);
    pub const FEBRUARY: Self = known_month(2);
    pub const MARCH: Self = known_month(3);
    pub const APRIL: Self = known_month(4);
    pub const MAY: Self = known_month(5);
    pub const JUNE: Self = known_month(6);
    pub const JULY: Self = known_month(7);
    pub const AUGUST: Self = known_month(8);
    pub const SEPTEMBER: Self = known_month(9);
    pub const OCTOBER: Self = known_month(10);
    pub const NOVEMBER: Self = known_month(11);
    pub const DECEMBER: Self = known_month(DECEMBER);

    /// All twelve months in calendar order
    pub const ALL: [Self; 12] = [
        Self::JANUARY,
        Self::FEBRUARY,
        Self::MARCH,
        Self::APRIL,
        Self::MAY,
        Self::JUNE,
        Self::JULY,
        Self::AUGUST,
        Self::SEPTEMBER,
        Self::OCTOBER,
        Self::NOVEMBER,
        Self::DECEMBER,
    ];

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub const fn new(value: u8) -> Result<Self, DateError> {
        if value == 0 || value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self::ALL[(value - 1) as usize])
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Month for an ordinal the conversion arithmetic has already bounded to 1..=12.
    pub(crate) const fn from_ordinal(value: i64) -> Self {
        debug_assert!(value >= 1 && value <= MAX_MONTH as i64);
        Self::ALL[(value - 1) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A linear day number. R.D. 1 is January 1, 1 of the proleptic Gregorian calendar.
///
/// Every `i32` is a valid day number in both conventions, so the inverse
/// conversions never fail.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Deref, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RataDie(i32);

impl RataDie {
    pub const MIN: Self = Self(i32::MIN);
    pub const MAX: Self = Self(i32::MAX);

    /// Wraps a raw day count
    #[inline]
    pub const fn new(days: i32) -> Self {
        Self(days)
    }

    /// Returns the raw day count
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Moves the day number by `days`, returning `None` on overflow.
    pub const fn checked_add(self, days: i32) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Narrows a day count computed in `i64`, returning `None` if it does not fit.
    pub(crate) fn from_wide(days: i64) -> Option<Self> {
        i32::try_from(days).ok().map(Self)
    }
}

/// Number of days from `rhs` to `self`
impl Sub for RataDie {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        i64::from(self.0) - i64::from(rhs.0)
    }
}

/// A civil date. Which absolute day it names depends on the convention
/// used to convert it; construction does not validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month.get()", "day")]
pub struct CalendarDate {
    year:  i32,
    month: Month,
    day:   u8,
}

impl CalendarDate {
    pub const fn new(year: i32, month: Month, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the components as a plain tuple
    pub const fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day)
    }

    /// First day of the given month
    pub(crate) const fn first_of(year: i32, month: Month) -> Self {
        Self::new(year, month, MIN_DAY)
    }

    /// Converts this date to a day number under `convention`.
    ///
    /// # Errors
    /// Returns the same errors as [`crate::Convention::to_rd`].
    pub fn to_rd(self, convention: crate::Convention) -> Result<RataDie, DateError> {
        convention.to_rd(self)
    }
}

impl From<CalendarDate> for (i32, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        date.to_tuple()
    }
}
