//! Deduction calculator.
//!
//! Walks a leave record's date range day by day and classifies each day as
//! billable or excluded under the per-type policy:
//!
//! - annual leave deducts days that are not Saturday, not Sunday, and not a
//!   registered public holiday;
//! - exceptional leave deducts days that are not a public holiday (weekends
//!   DO count against this balance - a deliberate policy asymmetry versus
//!   annual leave);
//! - every other type (sick, maternity, paternity, unrecognized) deducts
//!   nothing.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::calendar::{days_inclusive, is_weekend, parse_calendar_date};
use crate::error::EngineResult;
use crate::models::LeaveType;

/// The outcome of a deduction calculation for a single leave record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    /// Count of calendar days in the inclusive range; 0 for an inverted range.
    pub total_days: u32,
    /// Count of days deducted from the category balance.
    pub deducted_days: u32,
}

/// Computes the total and deducted day counts for one leave record.
///
/// The iteration is an explicit day-by-day walk because weekend and holiday
/// membership must be evaluated per individual date. An inverted range
/// (`end < start`) yields `{0, 0}` without error; a single-day range yields
/// `total_days = 1`. The exclusion set is never mutated, so repeated calls on
/// the same inputs return identical results.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use leave_engine::calculation::compute_deduction;
/// use leave_engine::models::LeaveType;
/// use chrono::NaiveDate;
///
/// // 2025-01-01 (Wed) to 2025-01-03 (Fri), with Jan 1 a public holiday
/// let mut exclusion = HashSet::new();
/// exclusion.insert(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
///
/// let result = compute_deduction(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
///     &LeaveType::Annual,
///     &exclusion,
/// );
/// assert_eq!(result.total_days, 3);
/// assert_eq!(result.deducted_days, 2);
/// ```
pub fn compute_deduction(
    start: NaiveDate,
    end: NaiveDate,
    leave_type: &LeaveType,
    exclusion: &HashSet<NaiveDate>,
) -> Deduction {
    let mut total_days = 0;
    let mut deducted_days = 0;

    for day in days_inclusive(start, end) {
        total_days += 1;
        let is_holiday = exclusion.contains(&day);
        match leave_type {
            LeaveType::Annual => {
                if !is_weekend(day) && !is_holiday {
                    deducted_days += 1;
                }
            }
            LeaveType::Exceptional => {
                if !is_holiday {
                    deducted_days += 1;
                }
            }
            _ => {}
        }
    }

    Deduction {
        total_days,
        deducted_days,
    }
}

/// String-input variant of [`compute_deduction`].
///
/// Parses both boundary dates with [`parse_calendar_date`], normalizing away
/// any time-of-day component, then delegates to the typed calculator.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidDateRange`] when either input
/// is unparsable. Parse failure is surfaced to the caller, never silently
/// coerced; an inverted but well-formed range is not an error.
pub fn compute_deduction_str(
    start: &str,
    end: &str,
    leave_type: &LeaveType,
    exclusion: &HashSet<NaiveDate>,
) -> EngineResult<Deduction> {
    let start = parse_calendar_date(start)?;
    let end = parse_calendar_date(end)?;
    Ok(compute_deduction(start, end, leave_type, exclusion))
}
