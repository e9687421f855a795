use crate::types::add_days_clamped;
use crate::weekday::WeekdayExt;
use chrono::NaiveDateTime;

/// Financial-day (business-day) arithmetic: Saturday and Sunday are
/// non-business days, everything else counts.
///
/// Both operations walk one calendar day at a time, so they are linear in
/// the day distance; suitable for moderate ranges, not for millennia.
pub trait FinancialDaysExt: Sized {
    /// Moves `days` business days from `self`, skipping weekends.
    ///
    /// Negative counts step backward; zero returns `self` unchanged.
    fn add_financial_days(&self, days: i64) -> Self;

    /// Counts business days between `self` and `other`, excluding the start
    /// day and including the end day. The result is non-negative regardless
    /// of argument order.
    fn count_financial_days(&self, other: Self) -> i64;
}

impl FinancialDaysExt for NaiveDateTime {
    fn add_financial_days(&self, days: i64) -> Self {
        let step = days.signum();
        let mut date = *self;
        for _ in 0..days.unsigned_abs() {
            loop {
                date = add_days_clamped(date, step);
                if date.is_weekday() {
                    break;
                }
            }
        }
        date
    }

    fn count_financial_days(&self, other: Self) -> i64 {
        // Whole-day distance truncated toward zero; a partial trailing day
        // does not count.
        let whole_days = (other - *self).num_days();
        let step = whole_days.signum();
        let mut date = *self;
        let mut count = 0;
        for _ in 0..whole_days.unsigned_abs() {
            date = add_days_clamped(date, step);
            if date.is_weekday() {
                count += 1;
            }
        }
        count
    }
}
