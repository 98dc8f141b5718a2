//! HTTP request handlers for the leave balance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{delete, get},
};
use chrono::{Datelike, Local};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    BalanceCategory, available_years, build_exclusion_set, compute_balance, count_active_on,
    leaves_for_year, year_snapshot,
};
use crate::error::EngineError;
use crate::export::{build_report, render_csv};
use crate::models::LeaveType;
use crate::store::{EmployeeRepo, HolidayRepo, LeaveRepo};

use super::request::{EmployeeUpsert, HolidayUpsert, LeaveUpsert};
use super::response::{ApiError, ApiErrorResponse, BalanceReport, StatsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(save_employee))
        .route("/employees/:id", delete(delete_employee))
        .route("/employees/:id/balance", get(employee_balance))
        .route("/leaves", get(list_leaves).post(save_leave))
        .route("/leaves/:id", delete(delete_leave))
        .route("/holidays", get(list_holidays).post(save_holiday))
        .route("/holidays/:id", delete(delete_holiday))
        .route("/stats", get(stats))
        .route("/reports/leaves.csv", get(leave_report_csv))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct YearQuery {
    year: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ReportQuery {
    year: Option<i32>,
    leave_type: Option<String>,
    employee_id: Option<String>,
}

async fn list_employees(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store().employees())
}

async fn save_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeUpsert>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let employee = payload.into_employee(state.policy());
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        "Saving employee"
    );
    state.store().save_employee(employee.clone());
    Json(employee)
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!(employee_id = %id, "Deleting employee");
    state.store().delete_employee(&id);
    StatusCode::NO_CONTENT
}

async fn employee_balance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<YearQuery>,
) -> impl IntoResponse {
    let Some(employee) = state.store().find_employee(&id) else {
        let api_error: ApiErrorResponse = EngineError::EmployeeNotFound { id }.into();
        return api_error.into_response();
    };

    let year = query.year.unwrap_or_else(|| Local::now().year());
    let leaves = state.store().leaves();
    let exclusion = build_exclusion_set(&state.store().holidays());

    let report = BalanceReport {
        employee_id: employee.id.clone(),
        year,
        annual: compute_balance(&employee, &leaves, &exclusion, year, BalanceCategory::Annual),
        exceptional: compute_balance(
            &employee,
            &leaves,
            &exclusion,
            year,
            BalanceCategory::Exceptional,
        ),
    };
    Json(report).into_response()
}

async fn list_leaves(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store().leaves())
}

/// Handler for POST /leaves.
///
/// Parses the date range, recomputes the derived day fields through the
/// engine, and only then persists the record, so stored `total_days` and
/// `deducted_days` can never drift from the range and type.
async fn save_leave(
    State(state): State<AppState>,
    payload: Result<Json<LeaveUpsert>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let upsert = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let exclusion = build_exclusion_set(&state.store().holidays());
    match upsert.into_record(&exclusion) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                record_id = %record.id,
                employee_id = %record.employee_id,
                total_days = record.total_days,
                deducted_days = record.deducted_days,
                "Saving leave record"
            );
            state.store().save_leave(record.clone());
            Json(record).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Leave record rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

async fn delete_leave(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!(record_id = %id, "Deleting leave record");
    state.store().delete_leave(&id);
    StatusCode::NO_CONTENT
}

async fn list_holidays(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store().holidays())
}

async fn save_holiday(
    State(state): State<AppState>,
    Json(payload): Json<HolidayUpsert>,
) -> impl IntoResponse {
    let record: crate::models::HolidayRecord = payload.into();
    info!(holiday_id = %record.id, name = %record.name, "Saving holiday");
    state.store().save_holiday(record.clone());
    Json(record)
}

async fn delete_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!(holiday_id = %id, "Deleting holiday");
    state.store().delete_holiday(&id);
    StatusCode::NO_CONTENT
}

async fn stats(State(state): State<AppState>, Query(query): Query<YearQuery>) -> impl IntoResponse {
    let today = Local::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());

    let employees = state.store().employees();
    let holidays = state.store().holidays();
    let leaves = state.store().leaves();

    Json(StatsResponse {
        year,
        active_today: count_active_on(&leaves, today),
        snapshot: year_snapshot(&employees, &holidays, &leaves, year),
        available_years: available_years(&leaves, today.year()),
    })
}

async fn leave_report_csv(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> impl IntoResponse {
    let year = query.year.unwrap_or_else(|| Local::now().year());
    let leave_type = query.leave_type.map(LeaveType::from);

    let employees = state.store().employees();
    let leaves = state.store().leaves();
    let exclusion = build_exclusion_set(&state.store().holidays());

    let mut bucket = leaves_for_year(&leaves, year, leave_type.as_ref());
    if let Some(employee_id) = &query.employee_id {
        bucket.retain(|l| l.employee_id == *employee_id);
    }
    let rows = build_report(&bucket, &employees, &exclusion);
    info!(year, rows = rows.len(), "Rendering leave report");

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        render_csv(&rows),
    )
}
