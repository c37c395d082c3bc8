//! Inclusive date ranges

use crate::domain::date_input::parse_date;
use crate::error::{MoodjError, Result};
use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)\s+to\s+").unwrap())
}

/// Longest window `last_days` will build, about a century
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// A closed interval of calendar days: `start <= date <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(MoodjError::InvalidRange(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        Ok(DateRange { start, end })
    }

    /// The `days` most recent days ending with `today`. `days` is clamped to
    /// `1..=MAX_WINDOW_DAYS` and the start never goes before the first
    /// representable date.
    pub fn last_days(days: u32, today: NaiveDate) -> Self {
        let span = i64::from(days.clamp(1, MAX_WINDOW_DAYS)) - 1;
        DateRange {
            start: today
                .checked_sub_signed(Duration::days(span))
                .unwrap_or(NaiveDate::MIN),
            end: today,
        }
    }

    /// Parse `"<date> to <date>"`
    pub fn parse(input: &str, today: NaiveDate) -> Result<Self> {
        let trimmed = input.trim();
        let parts: Vec<&str> = separator_regex().split(trimmed).collect();

        if parts.len() != 2 || parts.iter().any(|p| p.trim().is_empty()) {
            return Err(MoodjError::InvalidRange(format!(
                "expected '<date> to <date>', got '{}'",
                trimmed
            )));
        }

        let start = parse_date(parts[0], today)
            .map_err(|_| MoodjError::InvalidRange(format!("bad start date '{}'", parts[0].trim())))?;
        let end = parse_date(parts[1], today)
            .map_err(|_| MoodjError::InvalidRange(format!("bad end date '{}'", parts[1].trim())))?;

        DateRange::new(start, end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
