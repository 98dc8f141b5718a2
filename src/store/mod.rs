//! Record store for employees, leave records, and holidays.
//!
//! The engine itself is a pure function of its inputs; this module is the
//! boundary it reads snapshots from. Each collection is exposed through an
//! explicit repository trait, and every write fires a [`StoreEvent`] to the
//! registered observers so dependent views can recompute. There is no
//! caching of computed balances - every figure is derived fresh from the
//! current raw records on each read.

mod memory;

pub use memory::{MemoryStore, StoreSnapshot};

use crate::models::{Employee, HolidayRecord, LeaveRecord};

/// Identifies which collection a write touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The employee collection changed.
    Employees,
    /// The leave record collection changed.
    Leaves,
    /// The holiday collection changed.
    Holidays,
}

/// Read/write access to the employee collection.
pub trait EmployeeRepo {
    /// Returns a snapshot of all registered employees.
    fn employees(&self) -> Vec<Employee>;
    /// Inserts the employee, or replaces the existing record with the same id.
    fn save_employee(&self, employee: Employee);
    /// Removes the employee. Leave history is deliberately not cascaded.
    fn delete_employee(&self, id: &str);
}

/// Read/write access to the leave record collection.
pub trait LeaveRepo {
    /// Returns a snapshot of all leave records.
    fn leaves(&self) -> Vec<LeaveRecord>;
    /// Inserts the record, or replaces the existing record with the same id.
    fn save_leave(&self, record: LeaveRecord);
    /// Removes the record. Deletion is destructive and immediate.
    fn delete_leave(&self, id: &str);
}

/// Read/write access to the holiday collection.
pub trait HolidayRepo {
    /// Returns a snapshot of all holiday records.
    fn holidays(&self) -> Vec<HolidayRecord>;
    /// Inserts the record, or replaces the existing record with the same id.
    fn save_holiday(&self, record: HolidayRecord);
    /// Removes the record.
    fn delete_holiday(&self, id: &str);
}
