use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH,
};
use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// A set of per-field overrides applied against a base date-time.
///
/// Each field is either an explicit override or absent, in which case the
/// base value is carried through. For the three date fields a *present* zero
/// is also treated as "keep base"; time fields have no such sentinel (an
/// explicit 0 hour means midnight). The asymmetry is inherited behavior and
/// covered by regression tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeFields {
    pub(crate) year: Option<i32>,
    pub(crate) month: Option<i32>,
    pub(crate) day: Option<i64>,
    pub(crate) hour: Option<i64>,
    pub(crate) minute: Option<i64>,
    pub(crate) second: Option<i64>,
    pub(crate) millisecond: Option<i64>,
}

impl DateTimeFields {
    /// Creates an empty field set (every field keeps the base value)
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the year
    pub const fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Overrides the month (1-12; values outside roll over)
    pub const fn month(mut self, month: i32) -> Self {
        self.month = Some(month);
        self
    }

    /// Overrides the day of month (values past month-end roll over)
    pub const fn day(mut self, day: i64) -> Self {
        self.day = Some(day);
        self
    }

    /// Overrides the hour (values outside 0-23 roll over)
    pub const fn hour(mut self, hour: i64) -> Self {
        self.hour = Some(hour);
        self
    }

    /// Overrides the minute
    pub const fn minute(mut self, minute: i64) -> Self {
        self.minute = Some(minute);
        self
    }

    /// Overrides the second
    pub const fn second(mut self, second: i64) -> Self {
        self.second = Some(second);
        self
    }

    /// Overrides the millisecond
    pub const fn millisecond(mut self, millisecond: i64) -> Self {
        self.millisecond = Some(millisecond);
        self
    }
}

// --- calendar helpers ---

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub(crate) const NANOS_PER_MILLI: u32 = 1_000_000;

pub(crate) fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub(crate) fn millisecond_of(dt: NaiveDateTime) -> i64 {
    use chrono::Timelike;
    i64::from(dt.nanosecond() / NANOS_PER_MILLI)
}

// --- saturating arithmetic ---
//
// Out-of-range calendar math coerces instead of failing: any step that would
// leave the representable range pins to the matching range bound.

pub(crate) fn add_signed_clamped(dt: NaiveDateTime, delta: TimeDelta) -> NaiveDateTime {
    dt.checked_add_signed(delta).unwrap_or(if delta < TimeDelta::zero() {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    })
}

pub(crate) fn add_delta_clamped(
    dt: NaiveDateTime,
    delta: Option<TimeDelta>,
    backward: bool,
) -> NaiveDateTime {
    delta.map_or(
        if backward {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        },
        |d| add_signed_clamped(dt, d),
    )
}

pub(crate) fn add_days_clamped(dt: NaiveDateTime, days: i64) -> NaiveDateTime {
    add_delta_clamped(dt, TimeDelta::try_days(days), days < 0)
}

pub(crate) fn add_months_clamped(dt: NaiveDateTime, months: i32) -> NaiveDateTime {
    if months >= 0 {
        dt.checked_add_months(Months::new(months.unsigned_abs()))
            .unwrap_or(NaiveDateTime::MAX)
    } else {
        dt.checked_sub_months(Months::new(months.unsigned_abs()))
            .unwrap_or(NaiveDateTime::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        at_midnight(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_is_leap_year_cases() {
        // Divisible by 4
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2021));
        assert!(!is_leap_year(2023));
        // Century years not divisible by 400
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        // Divisible by 400
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
        // Astronomical year numbering for the proleptic calendar
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2024, month), 31, "Month {month} should have 31 days");
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2024, month), 30, "Month {month} should have 30 days");
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }

    #[test]
    fn test_fields_builder() {
        let fields = DateTimeFields::new().year(2024).hour(9).millisecond(250);
        assert_eq!(fields.year, Some(2024));
        assert_eq!(fields.month, None);
        assert_eq!(fields.day, None);
        assert_eq!(fields.hour, Some(9));
        assert_eq!(fields.minute, None);
        assert_eq!(fields.millisecond, Some(250));
    }

    #[test]
    fn test_fields_serde_roundtrip() {
        let fields = DateTimeFields::new().year(2024).month(2).day(29);
        let json = serde_json::to_string(&fields).unwrap();
        let parsed: DateTimeFields = serde_json::from_str(&json).unwrap();
        assert_eq!(fields, parsed);
    }

    #[test]
    fn test_add_months_clamped_rollover() {
        let d = add_months_clamped(dt(2024, 1, 1), 13);
        assert_eq!((d.year(), d.month()), (2025, 2));
        let d = add_months_clamped(dt(2024, 1, 1), -1);
        assert_eq!((d.year(), d.month()), (2023, 12));
    }

    #[test]
    fn test_add_months_clamped_saturates() {
        let max_year = NaiveDate::MAX.year();
        let d = add_months_clamped(dt(max_year, 1, 1), 24);
        assert_eq!(d, NaiveDateTime::MAX);
        let min_year = NaiveDate::MIN.year();
        let d = add_months_clamped(dt(min_year, 12, 1), -24);
        assert_eq!(d, NaiveDateTime::MIN);
    }

    #[test]
    fn test_add_days_clamped_saturates() {
        assert_eq!(add_days_clamped(dt(2024, 1, 1), i64::MAX), NaiveDateTime::MAX);
        assert_eq!(add_days_clamped(dt(2024, 1, 1), i64::MIN), NaiveDateTime::MIN);
        let d = add_days_clamped(dt(2024, 2, 28), 2);
        assert_eq!((d.month(), d.day()), (3, 1));
    }

    #[test]
    fn test_millisecond_of() {
        let base = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_milli_opt(10, 30, 15, 789)
            .unwrap();
        assert_eq!(millisecond_of(base), 789);
    }
}
