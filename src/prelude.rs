//! Prelude module for the date_ext crate.
//!
//! Re-exports the extension traits so they can be brought into scope in one
//! `use`, plus the derive macros used across the crate.

pub use crate::compare::DateCompareExt;
pub use crate::diff::DateDiffExt;
pub use crate::financial::FinancialDaysExt;
pub use crate::resolve::DateResolveExt;
pub use crate::weekday::WeekdayExt;

#[allow(unused_imports)]
pub use derive_more::Display;
