//! Calendar dates, granularities and date-template expansion

use std::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::constants as C;
use crate::error::{CalendarError, Result};

/// `{{date:<format>}}` placeholder in folder templates
static DATE_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{date:([^}]*)\}\}").expect("valid placeholder regex"));

/// Granularity of a calendar annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Day,
    Week,
    /// Only used for monthly notes standing in for missing daily notes
    Month,
}

/// A single day on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from year, month and day; `None` if it does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today in local time
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse `YYYY-MM-DD`
    pub fn parse(input: &str) -> Result<Self> {
        NaiveDate::parse_from_str(input.trim(), C::CLI_DATE_FORMAT)
            .map(Self)
            .map_err(|_| CalendarError::InvalidDate {
                input: input.to_string(),
                expected: "YYYY-MM-DD",
            })
    }

    /// Parse `YYYY-MM` into the first day of that month
    pub fn parse_month(input: &str) -> Result<Self> {
        NaiveDate::parse_from_str(&format!("{}-01", input.trim()), C::CLI_DATE_FORMAT)
            .map(Self)
            .map_err(|_| CalendarError::InvalidDate {
                input: input.to_string(),
                expected: "YYYY-MM",
            })
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Format with a strftime string.
    ///
    /// Returns `None` when the format string is malformed or asks for fields
    /// a plain date does not have (hours, time zones), instead of panicking.
    pub fn format(&self, format: &str) -> Option<String> {
        let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return None;
        }
        let mut out = String::new();
        write!(out, "{}", self.0.format_with_items(items.iter())).ok()?;
        Some(out)
    }

    /// Every day of the month this date falls in
    pub fn month_days(&self) -> Vec<CalendarDate> {
        let first = self.0.with_day(1).unwrap_or(self.0);
        first
            .iter_days()
            .take_while(|d| d.month() == first.month())
            .map(Self)
            .collect()
    }

    /// Monday of this date's ISO week
    pub fn week_start(&self) -> CalendarDate {
        let offset = self.0.weekday().num_days_from_monday() as u64;
        Self(self.0 - chrono::Days::new(offset))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(C::CLI_DATE_FORMAT))
    }
}

/// Substitute every `{{date:<format>}}` in `template` with `date` formatted
/// per `<format>`, in one left-to-right pass.
///
/// Placeholders whose format cannot be applied are kept as literal text.
pub fn expand_date_template(template: &str, date: &CalendarDate) -> String {
    DATE_PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let format = &caps[1];
            if format.is_empty() {
                return caps[0].to_string();
            }
            date.format(format).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
