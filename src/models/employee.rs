//! Employee model.
//!
//! This module defines the Employee struct representing a registered
//! staff member with per-category leave entitlements.

use serde::{Deserialize, Serialize};

/// Default annual leave entitlement in days per year.
pub const DEFAULT_ANNUAL_ENTITLEMENT: u32 = 30;

/// Default exceptional leave entitlement in days per year.
pub const DEFAULT_EXCEPTIONAL_ENTITLEMENT: u32 = 10;

/// Represents a registered employee.
///
/// Entitlement fields are required and populated with the configured
/// defaults at creation time, so no read site needs a fallback value.
/// Deleting an employee does not cascade-delete their leave history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The organizational staff number (e.g., "PREF-2025-014").
    pub employee_code: String,
    /// The department the employee belongs to.
    pub department: String,
    /// Contact email address.
    pub email: String,
    /// Total allotted annual leave days per year.
    #[serde(default = "default_annual")]
    pub annual_entitlement: u32,
    /// Total allotted exceptional leave days per year.
    #[serde(default = "default_exceptional")]
    pub exceptional_entitlement: u32,
}

fn default_annual() -> u32 {
    DEFAULT_ANNUAL_ENTITLEMENT
}

fn default_exceptional() -> u32 {
    DEFAULT_EXCEPTIONAL_ENTITLEMENT
}
