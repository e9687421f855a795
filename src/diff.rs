use crate::consts::{DAYS_PER_WEEK, MONTHS_PER_QUARTER, MONTHS_PER_YEAR, QUARTERS_PER_YEAR};
use crate::prelude::*;
use chrono::{Datelike, NaiveDateTime};
use std::str::FromStr;

/// A SQL-style date-difference unit.
///
/// Year, quarter, and month are calendar-component units computed from
/// calendar fields alone (day and time of day are ignored). The rest are
/// elapsed-duration units truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DatePart {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "quarter")]
    Quarter,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "millisecond")]
    Millisecond,
}

/// The unit string given to [`DateDiffExt::date_diff`] is not a recognized
/// date part. This is the only error the crate raises.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("date part {0:?} is unknown")]
pub struct UnsupportedDatePart(pub String);

impl FromStr for DatePart {
    type Err = UnsupportedDatePart;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" | "yy" | "yyyy" => Ok(Self::Year),
            "quarter" | "qq" | "q" => Ok(Self::Quarter),
            "month" | "mm" | "m" => Ok(Self::Month),
            "day" | "d" | "dd" => Ok(Self::Day),
            "week" | "wk" | "ww" => Ok(Self::Week),
            "hour" | "hh" => Ok(Self::Hour),
            "minute" | "mi" | "n" => Ok(Self::Minute),
            "second" | "ss" | "s" => Ok(Self::Second),
            "millisecond" | "ms" => Ok(Self::Millisecond),
            _ => Err(UnsupportedDatePart(s.to_owned())),
        }
    }
}

impl serde::Serialize for DatePart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DatePart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// SQL-style differencing between two date-times.
pub trait DateDiffExt: Sized {
    /// Signed difference `end - self` in the unit named by `part`.
    ///
    /// `part` accepts the standard SQL names and abbreviations,
    /// case-insensitively: year/yy/yyyy, quarter/qq/q, month/mm/m, day/d/dd,
    /// week/wk/ww, hour/hh, minute/mi/n, second/ss/s, millisecond/ms.
    ///
    /// # Errors
    /// Returns [`UnsupportedDatePart`] for an unrecognized unit string.
    fn date_diff(&self, part: &str, end: Self) -> Result<i64, UnsupportedDatePart>;

    /// Signed difference `end - self` for an already-parsed unit
    fn date_diff_part(&self, part: DatePart, end: Self) -> i64;

    /// The calendar quarter of the date, 1-4
    fn quarter(&self) -> u32;
}

fn quarter_index(dt: NaiveDateTime) -> i64 {
    i64::from((dt.month() - 1) / MONTHS_PER_QUARTER)
}

impl DateDiffExt for NaiveDateTime {
    fn date_diff(&self, part: &str, end: Self) -> Result<i64, UnsupportedDatePart> {
        Ok(self.date_diff_part(part.parse()?, end))
    }

    fn date_diff_part(&self, part: DatePart, end: Self) -> i64 {
        let year_diff = i64::from(end.year()) - i64::from(self.year());
        let elapsed = end - *self;
        match part {
            DatePart::Year => year_diff,
            DatePart::Quarter => {
                year_diff * QUARTERS_PER_YEAR + quarter_index(end) - quarter_index(*self)
            }
            DatePart::Month => {
                year_diff * MONTHS_PER_YEAR + i64::from(end.month()) - i64::from(self.month())
            }
            DatePart::Day => elapsed.num_days(),
            DatePart::Week => elapsed.num_days() / DAYS_PER_WEEK,
            DatePart::Hour => elapsed.num_hours(),
            DatePart::Minute => elapsed.num_minutes(),
            DatePart::Second => elapsed.num_seconds(),
            DatePart::Millisecond => elapsed.num_milliseconds(),
        }
    }

    fn quarter(&self) -> u32 {
        (self.month() - 1) / MONTHS_PER_QUARTER + 1
    }
}
