//! Holiday calendar index.
//!
//! Expands holiday records into an explicit set of individual calendar
//! dates, used as the exclusion mask by the deduction calculator.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::calculation::calendar::days_inclusive;
use crate::models::HolidayRecord;

/// Builds the exclusion set covering every date of every holiday record.
///
/// Each record's inclusive range is enumerated day by day; a record whose
/// `end_date` precedes its `start_date` contributes nothing. The result is
/// order-independent and deduplicates overlapping ranges by set semantics.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::build_exclusion_set;
/// use leave_engine::models::HolidayRecord;
/// use chrono::NaiveDate;
///
/// let holidays = vec![HolidayRecord {
///     id: "hol_001".to_string(),
///     name: "Eid al-Adha".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
/// }];
///
/// let exclusion = build_exclusion_set(&holidays);
/// assert_eq!(exclusion.len(), 3);
/// assert!(exclusion.contains(&NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
/// ```
pub fn build_exclusion_set(holidays: &[HolidayRecord]) -> HashSet<NaiveDate> {
    holidays
        .iter()
        .flat_map(|h| days_inclusive(h.start_date, h.end_date))
        .collect()
}
