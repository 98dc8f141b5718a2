//! Public holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an official non-working period.
///
/// Both dates are inclusive. Multiple holiday records may exist per year;
/// overlapping ranges are tolerated and deduplicated by the exclusion set.
///
/// # Example
///
/// ```
/// use leave_engine::models::HolidayRecord;
/// use chrono::NaiveDate;
///
/// let holiday = HolidayRecord {
///     id: "hol_001".to_string(),
///     name: "New Year's Day".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// Unique identifier for the holiday record.
    pub id: String,
    /// The name of the holiday (e.g., "Throne Day").
    pub name: String,
    /// The first day of the holiday (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the holiday (inclusive).
    pub end_date: NaiveDate,
}
