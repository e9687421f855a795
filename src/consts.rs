/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// First day of month
pub const MIN_DAY: u32 = 1;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
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

/// Days in a calendar week
pub const DAYS_PER_WEEK: i64 = 7;

/// Months in a calendar year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Months in a calendar quarter
pub const MONTHS_PER_QUARTER: u32 = 3;

/// Quarters in a calendar year
pub const QUARTERS_PER_YEAR: i64 = 4;

/// First valid week-of-year number (inclusive)
pub const MIN_WEEK: i32 = 1;

/// Last valid week-of-year number (inclusive)
pub const MAX_WEEK: i32 = 53;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
