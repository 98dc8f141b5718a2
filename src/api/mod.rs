//! HTTP API module for the leave balance engine.
//!
//! This module provides the REST endpoints the administrator front-end
//! consumes: record CRUD, computed balances, dashboard statistics, and the
//! CSV leave report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeUpsert, HolidayUpsert, LeaveUpsert};
pub use response::{ApiError, BalanceReport, StatsResponse};
pub use state::AppState;
