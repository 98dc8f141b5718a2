//! Leave record model and leave type categories.
//!
//! This module defines the [`LeaveRecord`] struct and the [`LeaveType`]
//! category set that drives the deduction policy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category of a leave request.
///
/// Only [`LeaveType::Annual`] and [`LeaveType::Exceptional`] deduct from a
/// tracked balance. Sick, maternity, and paternity leave are recorded and
/// reportable but never consume a balance. Unrecognized type strings are
/// preserved as [`LeaveType::Other`] and treated as non-deducting, so records
/// entered ahead of a code update degrade gracefully instead of failing.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveType;
///
/// let annual: LeaveType = serde_json::from_str("\"annual\"").unwrap();
/// assert_eq!(annual, LeaveType::Annual);
///
/// let unknown: LeaveType = serde_json::from_str("\"unpaid\"").unwrap();
/// assert_eq!(unknown, LeaveType::Other("unpaid".to_string()));
/// assert!(!unknown.is_deducting());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeaveType {
    /// Annual leave - deducts working days (weekends and holidays excluded).
    Annual,
    /// Exceptional leave - deducts calendar days (only holidays excluded).
    Exceptional,
    /// Sick leave - recorded but non-deducting.
    Sick,
    /// Maternity leave - recorded but non-deducting.
    Maternity,
    /// Paternity leave - recorded but non-deducting.
    Paternity,
    /// Any type string outside the fixed category set; non-deducting.
    Other(String),
}

impl LeaveType {
    /// Returns the canonical string form of this leave type.
    pub fn as_str(&self) -> &str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Exceptional => "exceptional",
            LeaveType::Sick => "sick",
            LeaveType::Maternity => "maternity",
            LeaveType::Paternity => "paternity",
            LeaveType::Other(s) => s,
        }
    }

    /// Returns true if this leave type consumes a tracked balance.
    pub fn is_deducting(&self) -> bool {
        matches!(self, LeaveType::Annual | LeaveType::Exceptional)
    }
}

impl From<String> for LeaveType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "annual" => LeaveType::Annual,
            "exceptional" => LeaveType::Exceptional,
            "sick" => LeaveType::Sick,
            "maternity" => LeaveType::Maternity,
            "paternity" => LeaveType::Paternity,
            _ => LeaveType::Other(s),
        }
    }
}

impl From<LeaveType> for String {
    fn from(t: LeaveType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a recorded leave request.
///
/// A record belongs to exactly one employee by id reference; the association
/// is non-owning and survives employee deletion. `start_date` and `end_date`
/// form an inclusive calendar-date range. The UI is expected to enforce
/// `start_date <= end_date`, but the engine tolerates a reversed range by
/// treating it as empty.
///
/// `total_days` and `deducted_days` are derived fields: they are recomputed
/// by the caller through the calculation engine whenever the range or type
/// changes and are never authoritative on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Unique identifier for the leave record.
    pub id: String,
    /// The id of the employee this record belongs to.
    pub employee_id: String,
    /// The leave category.
    pub leave_type: LeaveType,
    /// The first day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason supplied at entry.
    #[serde(default)]
    pub reason: String,
    /// Derived: count of calendar days in the range.
    #[serde(default)]
    pub total_days: u32,
    /// Derived: count of days deducted from the category balance.
    #[serde(default)]
    pub deducted_days: u32,
}
