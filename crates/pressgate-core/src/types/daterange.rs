//! Date-range presets for list filtering.
//!
//! Mirrors the sidebar presets of the admin panel's date-range picker:
//! day, ISO-week, calendar-month, and calendar-year windows relative to
//! a reference date.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new range. Swaps the bounds if given in reverse order.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// Whether the given date falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Named relative ranges offered as one-click presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePreset {
    /// The reference date itself.
    Today,
    /// The day before the reference date.
    Yesterday,
    /// Monday through Sunday of the reference date's ISO week.
    ThisWeek,
    /// The full ISO week before this one.
    LastWeek,
    /// First through last day of the reference date's month.
    ThisMonth,
    /// The full calendar month before this one.
    LastMonth,
    /// January 1 through December 31 of the reference date's year.
    ThisYear,
    /// The full calendar year before this one.
    LastYear,
}

impl RangePreset {
    /// Resolve the preset into a concrete range relative to `today`.
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            Self::Today => DateRange::new(today, today),
            Self::Yesterday => {
                let d = today.checked_sub_days(Days::new(1)).unwrap_or(today);
                DateRange::new(d, d)
            }
            Self::ThisWeek => {
                let start = iso_week_start(today);
                let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
                DateRange::new(start, end)
            }
            Self::LastWeek => {
                let this_start = iso_week_start(today);
                let start = this_start
                    .checked_sub_days(Days::new(7))
                    .unwrap_or(this_start);
                let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
                DateRange::new(start, end)
            }
            Self::ThisMonth => DateRange::new(month_start(today), month_end(today)),
            Self::LastMonth => {
                let prev = month_start(today)
                    .checked_sub_days(Days::new(1))
                    .unwrap_or(today);
                DateRange::new(month_start(prev), prev)
            }
            Self::ThisYear => DateRange::new(year_start(today), year_end(today)),
            Self::LastYear => {
                let prev = year_start(today)
                    .checked_sub_days(Days::new(1))
                    .unwrap_or(today);
                DateRange::new(year_start(prev), prev)
            }
        }
    }

    /// Return the preset as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::ThisWeek => "this_week",
            Self::LastWeek => "last_week",
            Self::ThisMonth => "this_month",
            Self::LastMonth => "last_month",
            Self::ThisYear => "this_year",
            Self::LastYear => "last_year",
        }
    }
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RangePreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "yesterday" => Ok(Self::Yesterday),
            "this_week" => Ok(Self::ThisWeek),
            "last_week" => Ok(Self::LastWeek),
            "this_month" => Ok(Self::ThisMonth),
            "last_month" => Ok(Self::LastMonth),
            "this_year" => Ok(Self::ThisYear),
            "last_year" => Ok(Self::LastYear),
            _ => Err(AppError::validation(format!(
                "Unknown date range preset: '{s}'"
            ))),
        }
    }
}

/// Monday of the ISO week containing `date`.
fn iso_week_start(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn month_end(date: NaiveDate) -> NaiveDate {
    let (next_y, next_m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .unwrap_or(date)
}

fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

fn year_end(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}
