use chrono::{Datelike, NaiveDateTime};

/// Date-level comparisons against an explicit reference instant.
///
/// The reference is always a parameter rather than "now" so the results stay
/// deterministic and the crate needs no clock.
pub trait DateCompareExt: Sized {
    /// Whether the calendar date of `self` is after the calendar date of
    /// `from` (time of day is ignored)
    fn is_future(&self, from: Self) -> bool;

    /// Whether the calendar date of `self` is before the calendar date of
    /// `from`
    fn is_past(&self, from: Self) -> bool;

    /// Whether the closed interval `[self, end]` overlaps
    /// `[other_start, other_end]`
    fn intersects(&self, end: Self, other_start: Self, other_end: Self) -> bool;

    /// Whole years elapsed from `self` (a date of birth) to `reference`,
    /// counting a year only once its anniversary has passed
    fn age_on(&self, reference: Self) -> i32;
}

impl DateCompareExt for NaiveDateTime {
    fn is_future(&self, from: Self) -> bool {
        self.date() > from.date()
    }

    fn is_past(&self, from: Self) -> bool {
        self.date() < from.date()
    }

    fn intersects(&self, end: Self, other_start: Self, other_end: Self) -> bool {
        other_end >= *self && other_start <= end
    }

    fn age_on(&self, reference: Self) -> i32 {
        let years = reference.year() - self.year();
        if (reference.month(), reference.day()) < (self.month(), self.day()) {
            years - 1
        } else {
            years
        }
    }
}
