//! Balance aggregator.
//!
//! Sums deducted days across all of an employee's leave records for a given
//! year against the employee's configured entitlement, producing the
//! used/remaining figures shown by the presentation layer.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculation::deduction::compute_deduction;
use crate::models::{Employee, LeaveRecord, LeaveType};

/// One of the two balance-tracked leave categories.
///
/// Sick, maternity, and paternity leave never consume either balance but
/// remain recorded and reportable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceCategory {
    /// Annual leave balance (default entitlement 30 days).
    Annual,
    /// Exceptional leave balance (default entitlement 10 days).
    Exceptional,
}

impl BalanceCategory {
    fn matches(&self, leave_type: &LeaveType) -> bool {
        match self {
            BalanceCategory::Annual => *leave_type == LeaveType::Annual,
            BalanceCategory::Exceptional => *leave_type == LeaveType::Exceptional,
        }
    }
}

/// Used/remaining figures for one employee, category, and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// The employee's configured entitlement for the category.
    pub total: u32,
    /// The sum of deducted days across the year's matching records.
    pub used: u32,
    /// `total - used`; negative when the balance is over-drawn. The engine
    /// does not clamp - presentation decides how to flag a negative value.
    pub remaining: i64,
}

/// Aggregates an employee's balance for one category and year.
///
/// Records are filtered to those belonging to `employee` whose `start_date`
/// falls within `year` and whose type matches `category`; each surviving
/// record's deduction is recomputed fresh from the raw range, never read
/// from the stored derived fields.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use leave_engine::calculation::{compute_balance, BalanceCategory};
/// use leave_engine::models::{Employee, LeaveRecord, LeaveType};
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Amina El Fassi".to_string(),
///     employee_code: "PREF-2025-014".to_string(),
///     department: "HR".to_string(),
///     email: "amina@example.org".to_string(),
///     annual_entitlement: 30,
///     exceptional_entitlement: 10,
/// };
/// let leave = LeaveRecord {
///     id: "lv_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     leave_type: LeaveType::Annual,
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     reason: String::new(),
///     total_days: 0,
///     deducted_days: 0,
/// };
///
/// let summary = compute_balance(&employee, &[leave], &HashSet::new(), 2025, BalanceCategory::Annual);
/// assert_eq!(summary.total, 30);
/// assert_eq!(summary.used, 5);
/// assert_eq!(summary.remaining, 25);
/// ```
pub fn compute_balance(
    employee: &Employee,
    leaves: &[LeaveRecord],
    exclusion: &HashSet<NaiveDate>,
    year: i32,
    category: BalanceCategory,
) -> BalanceSummary {
    let used: u32 = leaves
        .iter()
        .filter(|l| l.employee_id == employee.id)
        .filter(|l| l.start_date.year() == year)
        .filter(|l| category.matches(&l.leave_type))
        .map(|l| compute_deduction(l.start_date, l.end_date, &l.leave_type, exclusion).deducted_days)
        .sum();

    let total = match category {
        BalanceCategory::Annual => employee.annual_entitlement,
        BalanceCategory::Exceptional => employee.exceptional_entitlement,
    };

    BalanceSummary {
        total,
        used,
        remaining: i64::from(total) - i64::from(used),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Amina El Fassi".to_string(),
            employee_code: "PREF-2025-014".to_string(),
            department: "HR".to_string(),
            email: "amina@example.org".to_string(),
            annual_entitlement: 30,
            exceptional_entitlement: 10,
        }
    }

    fn make_leave(
        id: &str,
        employee_id: &str,
        leave_type: LeaveType,
        start: &str,
        end: &str,
    ) -> LeaveRecord {
        LeaveRecord {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            leave_type,
            start_date: date(start),
            end_date: date(end),
            reason: String::new(),
            total_days: 0,
            deducted_days: 0,
        }
    }

    // ==========================================================================
    // BA-001: Annual balance sums deducted days against the entitlement
    // ==========================================================================
    #[test]
    fn test_ba_001_annual_balance_with_22_used() {
        // 2025-06-02 (Mon) .. 2025-07-01 (Tue): 30 calendar days, 22 working days
        let employee = make_employee();
        let leaves = vec![make_leave(
            "lv_001",
            "emp_001",
            LeaveType::Annual,
            "2025-06-02",
            "2025-07-01",
        )];

        let summary = compute_balance(
            &employee,
            &leaves,
            &HashSet::new(),
            2025,
            BalanceCategory::Annual,
        );
        assert_eq!(summary.total, 30);
        assert_eq!(summary.used, 22);
        assert_eq!(summary.remaining, 8);
    }

    // ==========================================================================
    // BA-002: Records of other employees are ignored
    // ==========================================================================
    #[test]
    fn test_ba_002_filters_by_employee() {
        let employee = make_employee();
        let leaves = vec![make_leave(
            "lv_001",
            "emp_999",
            LeaveType::Annual,
            "2025-01-06",
            "2025-01-10",
        )];

        let summary = compute_balance(
            &employee,
            &leaves,
            &HashSet::new(),
            2025,
            BalanceCategory::Annual,
        );
        assert_eq!(summary.used, 0);
        assert_eq!(summary.remaining, 30);
    }

    // ==========================================================================
    // BA-003: Records starting in another year are ignored
    // ==========================================================================
    #[test]
    fn test_ba_003_filters_by_start_year() {
        let employee = make_employee();
        let leaves = vec![
            make_leave("lv_001", "emp_001", LeaveType::Annual, "2024-12-01", "2024-12-05"),
            make_leave("lv_002", "emp_001", LeaveType::Annual, "2025-01-06", "2025-01-10"),
        ];

        let summary = compute_balance(
            &employee,
            &leaves,
            &HashSet::new(),
            2025,
            BalanceCategory::Annual,
        );
        assert_eq!(summary.used, 5);
    }

    // ==========================================================================
    // BA-004: Categories are tracked independently
    // ==========================================================================
    #[test]
    fn test_ba_004_categories_are_independent() {
        let employee = make_employee();
        let leaves = vec![
            make_leave("lv_001", "emp_001", LeaveType::Annual, "2025-01-06", "2025-01-10"),
            make_leave("lv_002", "emp_001", LeaveType::Exceptional, "2025-02-03", "2025-02-04"),
        ];

        let annual = compute_balance(
            &employee,
            &leaves,
            &HashSet::new(),
            2025,
            BalanceCategory::Annual,
        );
        let exceptional = compute_balance(
            &employee,
            &leaves,
            &HashSet::new(),
            2025,
            BalanceCategory::Exceptional,
        );
        assert_eq!(annual.used, 5);
        assert_eq!(exceptional.used, 2);
        assert_eq!(exceptional.total, 10);
        assert_eq!(exceptional.remaining, 8);
    }

    // ==========================================================================
    // BA-005: Remaining may go negative, never clamped
    // ==========================================================================
    #[test]
    fn test_ba_005_overdrawn_balance_is_negative() {
        let mut employee = make_employee();
        employee.exceptional_entitlement = 3;
        let leaves = vec![make_leave(
            "lv_001",
            "emp_001",
            LeaveType::Exceptional,
            "2025-03-03",
            "2025-03-09",
        )];

        let summary = compute_balance(
            &employee,
            &leaves,
            &HashSet::new(),
            2025,
            BalanceCategory::Exceptional,
        );
        assert_eq!(summary.used, 7);
        assert_eq!(summary.remaining, -4);
    }

    #[test]
    fn test_non_deducting_types_never_consume_balance() {
        let employee = make_employee();
        let leaves = vec![
            make_leave("lv_001", "emp_001", LeaveType::Sick, "2025-01-06", "2025-01-17"),
            make_leave("lv_002", "emp_001", LeaveType::Maternity, "2025-02-01", "2025-04-30"),
        ];

        for category in [BalanceCategory::Annual, BalanceCategory::Exceptional] {
            let summary = compute_balance(&employee, &leaves, &HashSet::new(), 2025, category);
            assert_eq!(summary.used, 0);
        }
    }

    #[test]
    fn test_holidays_reduce_usage() {
        let employee = make_employee();
        let leaves = vec![make_leave(
            "lv_001",
            "emp_001",
            LeaveType::Annual,
            "2025-01-01",
            "2025-01-03",
        )];
        let exclusion: HashSet<NaiveDate> = [date("2025-01-01")].into_iter().collect();

        let summary = compute_balance(&employee, &leaves, &exclusion, 2025, BalanceCategory::Annual);
        assert_eq!(summary.used, 2);
    }

    #[test]
    fn test_empty_record_set_uses_nothing() {
        let employee = make_employee();
        let summary = compute_balance(
            &employee,
            &[],
            &HashSet::new(),
            2025,
            BalanceCategory::Annual,
        );
        assert_eq!(summary.used, 0);
        assert_eq!(summary.remaining, 30);
    }

    proptest! {
        /// remaining = total - used exactly, including negative remaining.
        #[test]
        fn prop_remaining_is_total_minus_used(entitlement in 0u32..60, span in 0i64..120) {
            let mut employee = make_employee();
            employee.exceptional_entitlement = entitlement;
            let start = date("2025-01-01");
            let leaves = vec![LeaveRecord {
                id: "lv_001".to_string(),
                employee_id: "emp_001".to_string(),
                leave_type: LeaveType::Exceptional,
                start_date: start,
                end_date: start + chrono::Duration::days(span),
                reason: String::new(),
                total_days: 0,
                deducted_days: 0,
            }];

            let summary = compute_balance(
                &employee,
                &leaves,
                &HashSet::new(),
                2025,
                BalanceCategory::Exceptional,
            );
            prop_assert_eq!(
                summary.remaining,
                i64::from(summary.total) - i64::from(summary.used)
            );
        }
    }
}
