//! Date input parsing and resolution

use crate::error::{MoodjError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date as typed by the operator, before it is pinned to a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence of a weekday strictly before today
    LastWeekday(Weekday),
    Exact(NaiveDate),
}

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

impl DateInput {
    /// Parse a date input string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => return Ok(DateInput::Today),
            "yesterday" => return Ok(DateInput::Yesterday),
            "tomorrow" => return Ok(DateInput::Tomorrow),
            _ => {}
        }

        if let Some(day) = weekday_from_name(&normalized) {
            return Ok(DateInput::Weekday(day));
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return weekday_from_name(rest.trim())
                .map(DateInput::LastWeekday)
                .ok_or_else(|| MoodjError::InvalidDate(input.trim().to_string()));
        }

        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
            .map(DateInput::Exact)
            .ok_or_else(|| MoodjError::InvalidDate(input.trim().to_string()))
    }

    /// Resolve to a calendar date relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match *self {
            DateInput::Today => today,
            DateInput::Yesterday => today - Duration::days(1),
            DateInput::Tomorrow => today + Duration::days(1),
            DateInput::Weekday(day) => today - Duration::days(days_since(today, day)),
            DateInput::LastWeekday(day) => {
                let back = match days_since(today, day) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            DateInput::Exact(date) => date,
        }
    }
}

/// Parse and resolve in one step
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    DateInput::parse(input).map(|d| d.resolve(today))
}

fn days_since(today: NaiveDate, target: Weekday) -> i64 {
    let now = today.weekday().num_days_from_monday() as i64;
    let then = target.num_days_from_monday() as i64;
    (now - then).rem_euclid(7)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(DateInput::parse("today").unwrap(), DateInput::Today);
        assert_eq!(DateInput::parse("  Yesterday ").unwrap(), DateInput::Yesterday);
        assert_eq!(DateInput::parse("tomorrow").unwrap(), DateInput::Tomorrow);
    }

    #[test]
    fn test_parse_iso_and_slash_dates() {
        assert_eq!(
            DateInput::parse("2024-01-03").unwrap(),
            DateInput::Exact(ymd(2024, 1, 3))
        );
        assert_eq!(
            DateInput::parse("2024/01/03").unwrap(),
            DateInput::Exact(ymd(2024, 1, 3))
        );
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(
            DateInput::parse("Friday").unwrap(),
            DateInput::Weekday(Weekday::Fri)
        );
        assert_eq!(
            DateInput::parse("last mon").unwrap(),
            DateInput::LastWeekday(Weekday::Mon)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DateInput::parse("").is_err());
        assert!(DateInput::parse("someday").is_err());
        assert!(DateInput::parse("2024-13-01").is_err());
        assert!(DateInput::parse("2024-02-30").is_err());
        assert!(DateInput::parse("last week").is_err());
    }

    #[test]
    fn test_resolve_relative_days() {
        let base = ymd(2025, 1, 17);
        assert_eq!(DateInput::Today.resolve(base), base);
        assert_eq!(DateInput::Yesterday.resolve(base), ymd(2025, 1, 16));
        assert_eq!(DateInput::Tomorrow.resolve(base), ymd(2025, 1, 18));
    }

    #[test]
    fn test_resolve_weekday_includes_today() {
        // Friday, Jan 17, 2025
        let base = ymd(2025, 1, 17);
        assert_eq!(DateInput::Weekday(Weekday::Fri).resolve(base), base);
        assert_eq!(
            DateInput::Weekday(Weekday::Mon).resolve(base),
            ymd(2025, 1, 13)
        );
        assert_eq!(
            DateInput::Weekday(Weekday::Sat).resolve(base),
            ymd(2025, 1, 11)
        );
    }

    #[test]
    fn test_resolve_last_weekday_is_strictly_before() {
        let base = ymd(2025, 1, 17);
        assert_eq!(
            DateInput::LastWeekday(Weekday::Fri).resolve(base),
            ymd(2025, 1, 10)
        );
        assert_eq!(
            DateInput::LastWeekday(Weekday::Thu).resolve(base),
            ymd(2025, 1, 16)
        );
    }

    #[test]
    fn test_parse_date_helper() {
        let base = ymd(2025, 1, 17);
        assert_eq!(parse_date("yesterday", base).unwrap(), ymd(2025, 1, 16));
        assert!(matches!(
            parse_date("nope", base),
            Err(MoodjError::InvalidDate(s)) if s == "nope"
        ));
    }
}
