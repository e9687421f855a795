//! Calendar arithmetic for [`chrono::NaiveDateTime`].
//!
//! Four groups of extension methods over a plain Gregorian date-time:
//!
//! - **field resolution** ([`DateResolveExt`]): rebuild a value from a base
//!   plus per-field overrides, with calendar-aware rollover
//! - **weekday navigation** ([`WeekdayExt`]): first/last weekday occurrences
//!   in a month, next/previous occurrence, week-of-year lookup
//! - **business days** ([`FinancialDaysExt`]): add and count
//!   weekday-only days
//! - **SQL-style differencing** ([`DateDiffExt`]): signed differences in
//!   calendar-component or elapsed-duration units
//!
//! Out-of-range inputs coerce (rollover, clamping, passthrough) instead of
//! failing; the only error in the crate is [`UnsupportedDatePart`] for an
//! unrecognized difference unit.
//!
//! ```
//! use chrono::{Datelike, NaiveDate, Weekday};
//! use date_ext::prelude::*;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//!
//! assert_eq!(start.date_diff("month", end), Ok(2));
//! assert_eq!(start.date_diff("day", end), Ok(46));
//!
//! // 2024-01-15 is a Monday
//! assert_eq!(start.next_day_of_week(Weekday::Mon).date().day(), 22);
//! assert_eq!(start.add_financial_days(5).date().day(), 22);
//! ```

mod compare;
mod consts;
mod diff;
mod financial;
pub mod prelude;
mod resolve;
mod types;
mod weekday;

pub use compare::DateCompareExt;
pub use consts::*;
pub use diff::{DateDiffExt, DatePart, UnsupportedDatePart};
pub use financial::FinancialDaysExt;
pub use resolve::DateResolveExt;
pub use types::{DateTimeFields, days_in_month, is_leap_year};
pub use weekday::WeekdayExt;
