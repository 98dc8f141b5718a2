//! CSV report export.
//!
//! Builds report rows for a filtered list of leave records, calling the
//! deduction calculator once per record, and renders them to CSV. Column
//! order matches the administrator report screen; the byte-order mark is
//! kept so spreadsheet applications detect UTF-8.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::compute_deduction;
use crate::models::{Employee, LeaveRecord};

/// One row of the leave report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The leave record id.
    pub record_id: String,
    /// The employee's display name, or "-" if the employee was deleted.
    pub employee_name: String,
    /// The leave category string.
    pub leave_type: String,
    /// The first day of the leave.
    pub start_date: NaiveDate,
    /// The last day of the leave.
    pub end_date: NaiveDate,
    /// Count of calendar days in the range.
    pub total_days: u32,
    /// Count of days deducted from the category balance.
    pub deducted_days: u32,
    /// Free-text reason.
    pub reason: String,
}

/// Builds report rows for the given records.
///
/// Day figures are recomputed through the engine per record rather than read
/// from the stored derived fields. Employee names are resolved by id; a
/// record whose employee has been deleted still appears, with a placeholder
/// name, because leave history is not cascade-deleted.
pub fn build_report(
    records: &[&LeaveRecord],
    employees: &[Employee],
    exclusion: &HashSet<NaiveDate>,
) -> Vec<ReportRow> {
    records
        .iter()
        .map(|record| {
            let deduction = compute_deduction(
                record.start_date,
                record.end_date,
                &record.leave_type,
                exclusion,
            );
            let employee_name = employees
                .iter()
                .find(|e| e.id == record.employee_id)
                .map(|e| e.name.clone())
                .unwrap_or_else(|| "-".to_string());
            ReportRow {
                record_id: record.id.clone(),
                employee_name,
                leave_type: record.leave_type.to_string(),
                start_date: record.start_date,
                end_date: record.end_date,
                total_days: deduction.total_days,
                deducted_days: deduction.deducted_days,
                reason: record.reason.clone(),
            }
        })
        .collect()
}

/// Renders report rows as a CSV document with a UTF-8 BOM.
pub fn render_csv(rows: &[ReportRow]) -> String {
    let header = "record_id,employee_name,leave_type,start_date,end_date,total_days,deducted_days,reason";
    let mut out = String::from("\u{feff}");
    out.push_str(header);
    for row in rows {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}",
            row.record_id,
            quote(&row.employee_name),
            row.leave_type,
            row.start_date,
            row.end_date,
            row.total_days,
            row.deducted_days,
            quote(&row.reason),
        ));
    }
    out
}

/// Quotes a free-text field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveType;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_employee(id: &str, name: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            employee_code: format!("PREF-{}", id),
            department: "HR".to_string(),
            email: format!("{}@example.org", id),
            annual_entitlement: 30,
            exceptional_entitlement: 10,
        }
    }

    fn make_leave(id: &str, employee_id: &str, start: &str, end: &str) -> LeaveRecord {
        LeaveRecord {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            leave_type: LeaveType::Annual,
            start_date: date(start),
            end_date: date(end),
            reason: "rest".to_string(),
            total_days: 0,
            deducted_days: 0,
        }
    }

    #[test]
    fn test_report_recomputes_day_figures() {
        let employees = vec![make_employee("emp_001", "Amina El Fassi")];
        // Stored derived fields are zero; the report must not trust them.
        let record = make_leave("lv_001", "emp_001", "2025-01-06", "2025-01-10");
        let rows = build_report(&[&record], &employees, &HashSet::new());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee_name, "Amina El Fassi");
        assert_eq!(rows[0].total_days, 5);
        assert_eq!(rows[0].deducted_days, 5);
    }

    #[test]
    fn test_deleted_employee_gets_placeholder_name() {
        let record = make_leave("lv_001", "emp_gone", "2025-01-06", "2025-01-10");
        let rows = build_report(&[&record], &[], &HashSet::new());
        assert_eq!(rows[0].employee_name, "-");
    }

    #[test]
    fn test_csv_starts_with_bom_and_header() {
        let csv = render_csv(&[]);
        assert!(csv.starts_with('\u{feff}'));
        assert!(csv.contains("record_id,employee_name"));
    }

    #[test]
    fn test_csv_row_contents() {
        let employees = vec![make_employee("emp_001", "Amina El Fassi")];
        let record = make_leave("lv_001", "emp_001", "2025-01-06", "2025-01-10");
        let rows = build_report(&[&record], &employees, &HashSet::new());
        let csv = render_csv(&rows);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "lv_001,\"Amina El Fassi\",annual,2025-01-06,2025-01-10,5,5,\"rest\""
        );
    }

    #[test]
    fn test_csv_escapes_embedded_quotes() {
        let mut record = make_leave("lv_001", "emp_001", "2025-01-06", "2025-01-06");
        record.reason = "the \"long\" weekend".to_string();
        let rows = build_report(&[&record], &[], &HashSet::new());
        let csv = render_csv(&rows);
        assert!(csv.contains("\"the \"\"long\"\" weekend\""));
    }
}
