//! Statistics roll-up.
//!
//! Pure derivations over the employee, leave, and holiday collections for a
//! reporting context: dashboard counts, per-year filters, per-type export
//! buckets, and the list of selectable years.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Employee, HolidayRecord, LeaveRecord, LeaveType};

/// Dashboard-level counts for one reporting year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSnapshot {
    /// Total registered employees (no year filter).
    pub employees: usize,
    /// Holiday records whose `start_date` falls in the target year.
    pub holidays: usize,
    /// Leave records whose `start_date` falls in the target year.
    pub leaves: usize,
}

/// Counts the leave records whose inclusive range contains `date`.
///
/// Used for the "on leave today" dashboard figure.
pub fn count_active_on(leaves: &[LeaveRecord], date: NaiveDate) -> usize {
    leaves
        .iter()
        .filter(|l| date >= l.start_date && date <= l.end_date)
        .count()
}

/// Derives the per-year dashboard counts.
pub fn year_snapshot(
    employees: &[Employee],
    holidays: &[HolidayRecord],
    leaves: &[LeaveRecord],
    year: i32,
) -> YearSnapshot {
    YearSnapshot {
        employees: employees.len(),
        holidays: holidays
            .iter()
            .filter(|h| h.start_date.year() == year)
            .count(),
        leaves: leaves.iter().filter(|l| l.start_date.year() == year).count(),
    }
}

/// Filters a year's leave records, optionally to a single type.
///
/// Passing `None` for `leave_type` returns the "all types" bucket: the full
/// year filter unpartitioned. The per-type export buckets are obtained by
/// passing each recognized type in turn.
pub fn leaves_for_year<'a>(
    leaves: &'a [LeaveRecord],
    year: i32,
    leave_type: Option<&LeaveType>,
) -> Vec<&'a LeaveRecord> {
    leaves
        .iter()
        .filter(|l| l.start_date.year() == year)
        .filter(|l| leave_type.is_none_or(|t| l.leave_type == *t))
        .collect()
}

/// Lists the years offered by the year selector.
///
/// The set of years in which at least one leave record starts, plus the
/// current calendar year, deduplicated and sorted descending.
pub fn available_years(leaves: &[LeaveRecord], current_year: i32) -> Vec<i32> {
    let mut years: BTreeSet<i32> = leaves.iter().map(|l| l.start_date.year()).collect();
    years.insert(current_year);
    years.into_iter().rev().collect()
}
