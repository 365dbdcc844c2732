/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for September
pub const SEPTEMBER: u8 = 9;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in an ordinary year
pub(crate) const DAYS_PER_YEAR: i64 = 365;
/// Days in a 4-year cycle with one leap day
pub(crate) const DAYS_PER_4_YEARS: i64 = 1461;
/// Days in a Gregorian century (24 leap days)
pub(crate) const DAYS_PER_100_YEARS: i64 = 36524;
/// Days in a full Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;

/// R.D. of January 1, 1 in the proleptic Gregorian calendar
pub const GREGORIAN_EPOCH: i32 = 1;
/// R.D. of January 1, 1 in the Julian calendar
pub const JULIAN_EPOCH: i32 = -1;

/// Year of the British switch from the Julian to the Gregorian calendar
pub const TRANSITION_YEAR: i32 = 1752;
/// Last Julian date before the switch: September 2, 1752
pub const LAST_JULIAN_DAY: u8 = 2;
/// First Gregorian date after the switch: September 14, 1752
pub const FIRST_GREGORIAN_DAY: u8 = 14;
/// R.D. of September 14, 1752, the first day counted as Gregorian
pub const TRANSITION_RD: i32 = 639_797;
