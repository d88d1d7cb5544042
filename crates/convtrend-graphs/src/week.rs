//! Week bucketing for the weekly view.
//!
//! Week numbers follow a simple count from January 1st rather than ISO-8601:
//! `week = ceil((day_of_year + weekday_of_jan_1 + 1) / 7)` with Sunday as day
//! zero, so the first days of January always land in week 1 of their own
//! year. A bucket is dated by snapping `Jan 1 + (week - 1) * 7 days` to a
//! Monday. Near year boundaries this does not match ISO week numbering.

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// Date format used for bucket dates and source dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A `(year, week)` bucket key, displayed as `2024-W03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    /// Calendar year of the dates in the bucket.
    pub year: i32,
    /// One-based week number within `year`.
    pub week: u32,
}

impl WeekKey {
    /// Bucket for a calendar date.
    pub fn for_date(date: NaiveDate) -> Self {
        let day_of_year = date.ordinal0();
        let weekday = date.weekday().num_days_from_sunday();
        let jan1_weekday = (weekday + 7 - day_of_year % 7) % 7;

        Self {
            year: date.year(),
            week: (day_of_year + jan1_weekday + 1).div_ceil(7),
        }
    }

    /// Bucket for a `YYYY-MM-DD` string, or `None` if it is not a date.
    pub fn for_date_str(date: &str) -> Option<Self> {
        parse_date(date).map(Self::for_date)
    }

    /// Monday used as the bucket's row date.
    ///
    /// Starts from `Jan 1 + (week - 1) * 7` days. Monday to Thursday move back
    /// to the Monday of that week, Friday and Saturday move forward to the next
    /// Monday, and Sunday moves forward one day.
    pub fn start_date(self) -> Option<NaiveDate> {
        let jan1 = NaiveDate::from_yo_opt(self.year, 1)?;
        let offset = u64::from(self.week.checked_sub(1)?) * 7;
        let reference = jan1.checked_add_days(Days::new(offset))?;

        match reference.weekday().num_days_from_sunday() {
            0 => reference.checked_add_days(Days::new(1)),
            dow @ 1..=4 => reference.checked_sub_days(Days::new(u64::from(dow - 1))),
            dow => reference.checked_add_days(Days::new(u64::from(8 - dow))),
        }
    }

    /// Bucket row date as a `YYYY-MM-DD` string.
    pub fn start_date_string(self) -> Option<String> {
        self.start_date().map(|d| d.format(DATE_FORMAT).to_string())
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}
