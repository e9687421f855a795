use crate::consts::{DAYS_PER_WEEK, JANUARY, MAX_WEEK, MIN_DAY, MIN_WEEK};
use crate::types::{add_days_clamped, at_midnight, days_in_month};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

/// Locates weekday occurrences relative to a month or a date.
///
/// Month-anchored results are returned at midnight; date-relative results
/// keep the anchor's time of day.
pub trait WeekdayExt: Sized {
    /// Whether the date falls on Saturday or Sunday
    fn is_weekend(&self) -> bool;

    /// Whether the date falls on a working weekday (Monday through Friday)
    fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// First occurrence of `target` within the month containing `self`
    fn first_day_of_week_in_month(&self, target: Weekday) -> Self;

    /// Last occurrence of `target` within the month containing `self`
    fn last_day_of_week_in_month(&self, target: Weekday) -> Self;

    /// First working weekday of the month containing `self`
    fn first_weekday_of_month(&self) -> Self;

    /// Last working weekday of the month containing `self`
    fn last_weekday_of_month(&self) -> Self;

    /// Nearest working weekday: Saturday maps to the preceding Friday,
    /// Sunday to the following Monday, anything else to itself
    fn closest_weekday(&self) -> Self;

    /// Next occurrence of `target` strictly after `self`.
    ///
    /// A date already on `target` moves a full week forward.
    fn next_day_of_week(&self, target: Weekday) -> Self;

    /// Previous occurrence of `target` strictly before `self`.
    ///
    /// A date already on `target` moves a full week back.
    fn previous_day_of_week(&self, target: Weekday) -> Self;

    /// The `target` day of week number `week` (1-53) of the year containing
    /// `self`, counting weeks from the first occurrence of `target` on or
    /// after January 1. Week numbers outside 1-53 return `self` unchanged.
    fn date_by_week(&self, week: i32, target: Weekday) -> Self;
}

/// Sunday-based weekday index, 0-6
fn dow(day: Weekday) -> i64 {
    i64::from(day.num_days_from_sunday())
}

/// Circular weekday subtraction; an exact match counts as a full week back.
/// Result is always in [-7, -1].
fn circular_sub(start: Weekday, end: Weekday) -> i64 {
    let diff = dow(start) - dow(end);
    if diff > 0 {
        diff - DAYS_PER_WEEK
    } else if diff == 0 {
        -DAYS_PER_WEEK
    } else {
        diff
    }
}

impl WeekdayExt for NaiveDateTime {
    fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn first_day_of_week_in_month(&self, target: Weekday) -> Self {
        let first = at_midnight(
            NaiveDate::from_ymd_opt(self.year(), self.month(), MIN_DAY)
                .unwrap_or_else(|| self.date()),
        );
        let mut diff = dow(first.weekday()) - dow(target);
        if diff > 0 {
            diff -= DAYS_PER_WEEK;
        }
        add_days_clamped(first, -diff)
    }

    fn last_day_of_week_in_month(&self, target: Weekday) -> Self {
        let last_dom = days_in_month(self.year(), self.month());
        let last = at_midnight(
            NaiveDate::from_ymd_opt(self.year(), self.month(), last_dom)
                .unwrap_or_else(|| self.date()),
        );
        let mut diff = dow(target) - dow(last.weekday());
        if diff > 0 {
            diff -= DAYS_PER_WEEK;
        }
        add_days_clamped(last, diff)
    }

    fn first_weekday_of_month(&self) -> Self {
        let first = at_midnight(
            NaiveDate::from_ymd_opt(self.year(), self.month(), MIN_DAY)
                .unwrap_or_else(|| self.date()),
        );
        for offset in 0..DAYS_PER_WEEK {
            let candidate = add_days_clamped(first, offset);
            if candidate.is_weekday() {
                return candidate;
            }
        }
        // Unreachable for a valid month; every 7-day span holds a weekday.
        first
    }

    fn last_weekday_of_month(&self) -> Self {
        let last_dom = days_in_month(self.year(), self.month());
        let last = at_midnight(
            NaiveDate::from_ymd_opt(self.year(), self.month(), last_dom)
                .unwrap_or_else(|| self.date()),
        );
        for offset in 0..DAYS_PER_WEEK {
            let candidate = add_days_clamped(last, -offset);
            if candidate.is_weekday() {
                return candidate;
            }
        }
        last
    }

    fn closest_weekday(&self) -> Self {
        match self.weekday() {
            Weekday::Sat => add_days_clamped(*self, -1),
            Weekday::Sun => add_days_clamped(*self, 1),
            _ => *self,
        }
    }

    fn next_day_of_week(&self, target: Weekday) -> Self {
        add_days_clamped(*self, -circular_sub(self.weekday(), target))
    }

    fn previous_day_of_week(&self, target: Weekday) -> Self {
        add_days_clamped(*self, circular_sub(target, self.weekday()))
    }

    fn date_by_week(&self, week: i32, target: Weekday) -> Self {
        if !(MIN_WEEK..=MAX_WEEK).contains(&week) {
            return *self;
        }
        let jan_first = at_midnight(
            NaiveDate::from_ymd_opt(self.year(), JANUARY, MIN_DAY).unwrap_or_else(|| self.date()),
        );
        let to_first = (dow(target) - dow(jan_first.weekday())).rem_euclid(DAYS_PER_WEEK);
        add_days_clamped(jan_first, DAYS_PER_WEEK * i64::from(week - 1) + to_first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        at_midnight(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    #[test]
    fn test_is_weekend() {
        assert!(dt(2024, 6, 15).is_weekend()); // Saturday
        assert!(dt(2024, 6, 16).is_weekend()); // Sunday
        assert!(!dt(2024, 6, 17).is_weekend()); // Monday
        assert!(dt(2024, 6, 17).is_weekday());
    }

    #[test]
    fn test_first_day_of_week_in_month() {
        // March 2024 starts on a Friday
        let anchor = dt(2024, 3, 15);
        assert_eq!(anchor.first_day_of_week_in_month(Weekday::Fri), dt(2024, 3, 1));
        assert_eq!(anchor.first_day_of_week_in_month(Weekday::Mon), dt(2024, 3, 4));
        assert_eq!(anchor.first_day_of_week_in_month(Weekday::Thu), dt(2024, 3, 7));
    }

    #[test]
    fn test_first_day_of_week_in_month_properties() {
        // Result is in the anchor's month, has the target weekday, and no
        // earlier date in the month matches.
        for anchor in [dt(2024, 2, 10), dt(2023, 2, 1), dt(2024, 12, 31)] {
            for target in ALL_WEEKDAYS {
                let found = anchor.first_day_of_week_in_month(target);
                assert_eq!(found.month(), anchor.month());
                assert_eq!(found.year(), anchor.year());
                assert_eq!(found.weekday(), target);
                assert!(found.day() <= 7, "a weekday must occur within the first 7 days");
            }
        }
    }

    #[test]
    fn test_last_day_of_week_in_month() {
        // March 2024 ends on a Sunday the 31st
        let anchor = dt(2024, 3, 15);
        assert_eq!(anchor.last_day_of_week_in_month(Weekday::Sun), dt(2024, 3, 31));
        assert_eq!(anchor.last_day_of_week_in_month(Weekday::Sat), dt(2024, 3, 30));
        assert_eq!(anchor.last_day_of_week_in_month(Weekday::Fri), dt(2024, 3, 29));
        assert_eq!(anchor.last_day_of_week_in_month(Weekday::Mon), dt(2024, 3, 25));
    }

    #[test]
    fn test_first_and_last_weekday_of_month() {
        // June 2024 starts on a Saturday
        assert_eq!(dt(2024, 6, 15).first_weekday_of_month(), dt(2024, 6, 3));
        // March 2024 ends on a Sunday
        assert_eq!(dt(2024, 3, 15).last_weekday_of_month(), dt(2024, 3, 29));
        // November 2024 ends on a Saturday
        assert_eq!(dt(2024, 11, 15).last_weekday_of_month(), dt(2024, 11, 29));
        // A month beginning on a weekday returns day 1
        assert_eq!(dt(2024, 3, 15).first_weekday_of_month(), dt(2024, 3, 1));
    }

    #[test]
    fn test_closest_weekday() {
        assert_eq!(dt(2024, 6, 15).closest_weekday(), dt(2024, 6, 14)); // Sat -> Fri
        assert_eq!(dt(2024, 6, 16).closest_weekday(), dt(2024, 6, 17)); // Sun -> Mon
        assert_eq!(dt(2024, 6, 12).closest_weekday(), dt(2024, 6, 12)); // Wed stays
    }

    #[test]
    fn test_closest_weekday_idempotent() {
        for day in 10..=20 {
            let d = dt(2024, 6, day);
            assert_eq!(d.closest_weekday().closest_weekday(), d.closest_weekday());
        }
    }

    #[test]
    fn test_next_day_of_week() {
        let wed = dt(2024, 6, 12);
        assert_eq!(wed.next_day_of_week(Weekday::Fri), dt(2024, 6, 14));
        assert_eq!(wed.next_day_of_week(Weekday::Mon), dt(2024, 6, 17));
        // Exact match moves a full week, never returns the anchor
        assert_eq!(wed.next_day_of_week(Weekday::Wed), dt(2024, 6, 19));
    }

    #[test]
    fn test_previous_day_of_week() {
        let wed = dt(2024, 6, 12);
        assert_eq!(wed.previous_day_of_week(Weekday::Mon), dt(2024, 6, 10));
        assert_eq!(wed.previous_day_of_week(Weekday::Fri), dt(2024, 6, 7));
        assert_eq!(wed.previous_day_of_week(Weekday::Wed), dt(2024, 6, 5));
    }

    #[test]
    fn test_next_previous_strict_movement() {
        let anchor = dt(2024, 6, 12);
        for target in ALL_WEEKDAYS {
            let next = anchor.next_day_of_week(target);
            let previous = anchor.previous_day_of_week(target);
            assert!(next > anchor, "next must move strictly forward");
            assert!(previous < anchor, "previous must move strictly backward");
            assert_eq!(next.weekday(), target);
            assert_eq!(previous.weekday(), target);
        }
    }

    #[test]
    fn test_next_preserves_time_of_day() {
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 12)
            .unwrap()
            .and_hms_milli_opt(9, 15, 0, 500)
            .unwrap();
        let next = anchor.next_day_of_week(Weekday::Fri);
        assert_eq!(next.time(), anchor.time());
    }

    #[test]
    fn test_date_by_week() {
        // January 1 2024 is a Monday, so week 1 Monday is January 1
        let anchor = dt(2024, 6, 12);
        assert_eq!(anchor.date_by_week(1, Weekday::Mon), dt(2024, 1, 1));
        assert_eq!(anchor.date_by_week(2, Weekday::Mon), dt(2024, 1, 8));
        assert_eq!(anchor.date_by_week(1, Weekday::Sun), dt(2024, 1, 7));

        // January 1 2023 is a Sunday
        let anchor = dt(2023, 6, 12);
        assert_eq!(anchor.date_by_week(1, Weekday::Sun), dt(2023, 1, 1));
        assert_eq!(anchor.date_by_week(1, Weekday::Mon), dt(2023, 1, 2));
        assert_eq!(anchor.date_by_week(10, Weekday::Mon), dt(2023, 3, 6));
    }

    #[test]
    fn test_date_by_week_rejects_out_of_range() {
        let anchor = dt(2024, 6, 12);
        assert_eq!(anchor.date_by_week(0, Weekday::Mon), anchor);
        assert_eq!(anchor.date_by_week(54, Weekday::Mon), anchor);
        assert_eq!(anchor.date_by_week(-3, Weekday::Mon), anchor);
        assert_eq!(anchor.date_by_week(53, Weekday::Mon), dt(2024, 12, 30));
    }
}
