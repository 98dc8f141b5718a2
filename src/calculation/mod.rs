//! Calculation logic for the leave balance engine.
//!
//! This module contains all the calculation functions for determining leave
//! deductions, including calendar-date range iteration, holiday exclusion
//! set construction, per-record deduction under the per-type policy, balance
//! aggregation across a year, and dashboard statistics roll-ups.

mod balance;
mod calendar;
mod deduction;
mod holiday_index;
mod statistics;

pub use balance::{BalanceCategory, BalanceSummary, compute_balance};
pub use calendar::{days_inclusive, is_weekend, parse_calendar_date};
pub use deduction::{Deduction, compute_deduction, compute_deduction_str};
pub use holiday_index::build_exclusion_set;
pub use statistics::{
    YearSnapshot, available_years, count_active_on, leaves_for_year, year_snapshot,
};
