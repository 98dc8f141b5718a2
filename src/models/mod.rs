//! Core data models for the leave balance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod holiday;
mod leave_record;

pub use employee::{DEFAULT_ANNUAL_ENTITLEMENT, DEFAULT_EXCEPTIONAL_ENTITLEMENT, Employee};
pub use holiday::HolidayRecord;
pub use leave_record::{LeaveRecord, LeaveType};
