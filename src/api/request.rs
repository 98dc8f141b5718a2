//! Request types for the leave balance engine API.
//!
//! Upsert bodies omit the id to create a record and carry it to update one.
//! Leave dates arrive as strings and are parsed through the engine's lenient
//! calendar parser so malformed input surfaces as a typed error instead of a
//! serde rejection.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{compute_deduction, parse_calendar_date};
use crate::config::LeavePolicy;
use crate::error::EngineResult;
use crate::models::{Employee, HolidayRecord, LeaveRecord, LeaveType};

/// Body for creating or updating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpsert {
    /// Existing id to update; omitted to create.
    #[serde(default)]
    pub id: Option<String>,
    /// The employee's display name.
    pub name: String,
    /// The organizational staff number.
    pub employee_code: String,
    /// The department the employee belongs to.
    pub department: String,
    /// Contact email address.
    pub email: String,
    /// Annual entitlement override; the policy default applies when omitted.
    #[serde(default)]
    pub annual_entitlement: Option<u32>,
    /// Exceptional entitlement override; the policy default applies when omitted.
    #[serde(default)]
    pub exceptional_entitlement: Option<u32>,
}

impl EmployeeUpsert {
    /// Converts the request into a domain employee, filling the id and the
    /// entitlement defaults so every stored record carries explicit values.
    pub fn into_employee(self, policy: &LeavePolicy) -> Employee {
        Employee {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name,
            employee_code: self.employee_code,
            department: self.department,
            email: self.email,
            annual_entitlement: self
                .annual_entitlement
                .unwrap_or(policy.annual_entitlement),
            exceptional_entitlement: self
                .exceptional_entitlement
                .unwrap_or(policy.exceptional_entitlement),
        }
    }
}

/// Body for creating or updating a leave record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveUpsert {
    /// Existing id to update; omitted to create.
    #[serde(default)]
    pub id: Option<String>,
    /// The id of the employee the record belongs to.
    pub employee_id: String,
    /// The leave category string.
    pub leave_type: LeaveType,
    /// The first day of the leave; plain date or datetime string.
    pub start_date: String,
    /// The last day of the leave; plain date or datetime string.
    pub end_date: String,
    /// Free-text reason.
    #[serde(default)]
    pub reason: String,
}

impl LeaveUpsert {
    /// Converts the request into a domain record, recomputing the derived
    /// day fields from the parsed range and the holiday exclusion set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidDateRange`] when either
    /// date string is unparsable.
    pub fn into_record(self, exclusion: &HashSet<NaiveDate>) -> EngineResult<LeaveRecord> {
        let start_date = parse_calendar_date(&self.start_date)?;
        let end_date = parse_calendar_date(&self.end_date)?;
        let deduction = compute_deduction(start_date, end_date, &self.leave_type, exclusion);
        Ok(LeaveRecord {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            employee_id: self.employee_id,
            leave_type: self.leave_type,
            start_date,
            end_date,
            reason: self.reason,
            total_days: deduction.total_days,
            deducted_days: deduction.deducted_days,
        })
    }
}

/// Body for creating or updating a holiday record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayUpsert {
    /// Existing id to update; omitted to create.
    #[serde(default)]
    pub id: Option<String>,
    /// The name of the holiday.
    pub name: String,
    /// The first day of the holiday (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the holiday (inclusive).
    pub end_date: NaiveDate,
}

impl From<HolidayUpsert> for HolidayRecord {
    fn from(req: HolidayUpsert) -> Self {
        HolidayRecord {
            id: req.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: req.name,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}
