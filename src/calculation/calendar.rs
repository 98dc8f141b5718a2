//! Calendar-date primitives.
//!
//! This module provides the date-range iterator used by the day-by-day
//! deduction walk, weekend classification, and lenient date parsing that
//! normalizes away any time-of-day component.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};

use crate::error::{EngineError, EngineResult};

/// Returns a finite iterator over every calendar date from `start` to `end`
/// inclusive.
///
/// Yields nothing when `end < start`. Month lengths and leap years are
/// handled by chrono's calendar arithmetic, not naive day-count addition.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::days_inclusive;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let days: Vec<_> = days_inclusive(start, end).collect();
/// // 2024 is a leap year, so Feb 29 is included
/// assert_eq!(days.len(), 3);
/// assert_eq!(days[1], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt()).take_while(move |d| *d <= end)
}

/// Returns true if the date falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2025-01-04 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 1, 4).unwrap()));
/// // 2025-01-06 is a Monday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Parses a calendar date from a string, discarding any time-of-day
/// component.
///
/// Accepts plain dates (`2025-01-01`), ISO datetimes (`2025-01-01T09:30:00`),
/// and RFC 3339 timestamps (`2025-01-01T09:30:00Z`). Two inputs differing
/// only in time-of-day on the same calendar day parse to the same date.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateRange`] when the input matches none of
/// the accepted formats.
pub fn parse_calendar_date(value: &str) -> EngineResult<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime.date());
    }
    match DateTime::parse_from_rfc3339(value) {
        Ok(datetime) => Ok(datetime.date_naive()),
        Err(err) => Err(EngineError::InvalidDateRange {
            value: value.to_string(),
            message: err.to_string(),
        }),
    }
}
