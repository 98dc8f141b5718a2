//! Leave balance and working-day calculation engine.
//!
//! This crate computes leave deductions and category balances for an HR
//! leave-management system: given leave records, registered public holidays,
//! and per-employee entitlements, it determines how many calendar days a
//! request spans and how many of those days are deducted from the employee's
//! annual or exceptional balance.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
