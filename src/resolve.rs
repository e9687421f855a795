use crate::consts::{JANUARY, MIN_DAY};
use crate::types::{
    DateTimeFields, add_days_clamped, add_delta_clamped, add_months_clamped, at_midnight,
    days_in_month, millisecond_of,
};
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

/// Rebuilds a date-time from a base value plus per-field overrides.
///
/// The composition always starts from January 1 of the resolved year at
/// midnight and adds the remaining components one unit at a time, so an
/// out-of-range component rolls over instead of failing: resolving day 30
/// against February lands in early March, month 14 lands in the next year.
pub trait DateResolveExt: Sized {
    /// Applies a set of field overrides against `self`.
    ///
    /// Omitted fields are carried over from `self`. A present zero for year,
    /// month, or day also means "keep base"; time fields take zero literally.
    fn resolve(&self, fields: &DateTimeFields) -> Self;

    /// First day of the month containing `self`, at midnight
    fn begin_of_month(&self) -> Self;

    /// Last day of the month containing `self`, at 23:59:59.999
    fn end_of_month(&self) -> Self;

    /// Replaces the hour, keeping every other field
    fn set_hour(&self, hour: i64) -> Self {
        self.resolve(&DateTimeFields::new().hour(hour))
    }

    /// Replaces hour and minute
    fn set_hour_minute(&self, hour: i64, minute: i64) -> Self {
        self.resolve(&DateTimeFields::new().hour(hour).minute(minute))
    }

    /// Replaces hour, minute, and second
    fn set_hour_minute_second(&self, hour: i64, minute: i64, second: i64) -> Self {
        self.resolve(&DateTimeFields::new().hour(hour).minute(minute).second(second))
    }

    /// Replaces hour, minute, second, and millisecond
    fn set_hour_minute_second_milli(
        &self,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> Self {
        self.resolve(
            &DateTimeFields::new()
                .hour(hour)
                .minute(minute)
                .second(second)
                .millisecond(millisecond),
        )
    }

    /// Replaces the year, keeping every other field
    fn set_year(&self, year: i32) -> Self {
        self.resolve(&DateTimeFields::new().year(year))
    }

    /// Replaces year and month
    fn set_year_month(&self, year: i32, month: i32) -> Self {
        self.resolve(&DateTimeFields::new().year(year).month(month))
    }

    /// Replaces year, month, and day
    fn set_year_month_day(&self, year: i32, month: i32, day: i64) -> Self {
        self.resolve(&DateTimeFields::new().year(year).month(month).day(day))
    }

    /// Start of the day containing `self` (00:00:00.000)
    fn begin_of_day(&self) -> Self {
        self.set_hour_minute_second_milli(0, 0, 0, 0)
    }

    /// End of the day containing `self` (23:59:59.999)
    fn end_of_day(&self) -> Self {
        self.set_hour_minute_second_milli(23, 59, 59, 999)
    }
}

/// January 1 at midnight of the resolved year.
///
/// The out-of-range handling is inverted by inheritance: a year above the
/// representable maximum resolves to the minimum year and vice versa.
fn start_of_year(base: NaiveDateTime, year: Option<i32>) -> NaiveDateTime {
    let max_year = NaiveDate::MAX.year();
    let min_year = NaiveDate::MIN.year();
    let resolved = match year {
        None | Some(0) => base.year(),
        Some(y) if y > max_year => min_year,
        Some(y) if y < min_year => max_year,
        Some(y) => y,
    };
    at_midnight(NaiveDate::from_ymd_opt(resolved, JANUARY, MIN_DAY).unwrap_or(NaiveDate::MIN))
}

impl DateResolveExt for NaiveDateTime {
    fn resolve(&self, fields: &DateTimeFields) -> Self {
        let dt = start_of_year(*self, fields.year);

        let month = match fields.month {
            Some(m) if m != 0 => m,
            _ => self.month() as i32,
        };
        let dt = add_months_clamped(dt, month - 1);

        let day = match fields.day {
            Some(d) if d != 0 => d,
            _ => i64::from(self.day()),
        };
        let dt = add_days_clamped(dt, day - 1);

        let hour = fields.hour.unwrap_or_else(|| i64::from(self.hour()));
        let dt = add_delta_clamped(dt, TimeDelta::try_hours(hour), hour < 0);

        let minute = fields.minute.unwrap_or_else(|| i64::from(self.minute()));
        let dt = add_delta_clamped(dt, TimeDelta::try_minutes(minute), minute < 0);

        let second = fields.second.unwrap_or_else(|| i64::from(self.second()));
        let dt = add_delta_clamped(dt, TimeDelta::try_seconds(second), second < 0);

        let millisecond = fields.millisecond.unwrap_or_else(|| millisecond_of(*self));
        add_delta_clamped(dt, TimeDelta::try_milliseconds(millisecond), millisecond < 0)
    }

    fn begin_of_month(&self) -> Self {
        at_midnight(
            NaiveDate::from_ymd_opt(self.year(), self.month(), MIN_DAY)
                .unwrap_or_else(|| self.date()),
        )
    }

    fn end_of_month(&self) -> Self {
        let last = days_in_month(self.year(), self.month());
        at_midnight(
            NaiveDate::from_ymd_opt(self.year(), self.month(), last)
                .unwrap_or_else(|| self.date()),
        )
        .end_of_day()
    }
}
