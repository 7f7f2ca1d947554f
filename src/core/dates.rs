//! Calendar helpers used by the term calculator.
//!
//! All dates are date-only; timestamps from the registry are normalized
//! to UTC and their time of day is dropped.

use crate::utils::error::{PatentError, Result};
use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime, Utc};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%B %d, %Y", "%m/%d/%Y"];

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(timestamp.date());
    }

    Err(PatentError::InvalidDate {
        value: value.to_string(),
    })
}

/// Adds whole years. Feb 29 lands on Feb 28 when the target year is not a leap year.
pub fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(years * 12))
        .ok_or_else(|| PatentError::DateOutOfRange {
            date: date.to_string(),
            reason: format!("adding {} years overflows the calendar", years),
        })
}

pub fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| PatentError::DateOutOfRange {
            date: date.to_string(),
            reason: format!("adding {} days overflows the calendar", days),
        })
}

/// Renders `June 8, 1995`: month spelled out, day not zero-padded.
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
