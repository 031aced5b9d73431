//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_salary, calculate_salary_with_attendance};
use crate::error::EngineError;
use crate::models::{PayMonth, format_currency};
use crate::store::PayslipFilter;

use super::request::{CheckOutRequest, CreatePayrunRequest, PayslipQuery, SalaryCalculationRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payruns", post(create_payrun_handler).get(list_payruns_handler))
        .route("/payslips", get(list_payslips_handler))
        .route("/salary/calculate", post(calculate_salary_handler))
        .route("/attendance/:id/check-out", post(check_out_handler))
        .with_state(state)
}

/// Maps a JSON body rejection onto an API error, logging the cause.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

fn engine_error(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_ok<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

/// Handler for `POST /payruns`.
///
/// Runs payroll for every active employee in the requested month and returns
/// the payrun together with the payslips it produced.
async fn create_payrun_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreatePayrunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payrun request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_error(rejection, correlation_id).into_response(),
    };

    let month = match PayMonth::parse(&request.month, request.year) {
        Ok(month) => month,
        Err(err) => return engine_error(err, correlation_id),
    };

    let start_time = Instant::now();
    match state
        .service()
        .run(&month, request.created_by.as_deref())
        .await
    {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                payrun_id = %outcome.payrun.id,
                total_employees = outcome.payrun.total_employees,
                total_amount = %format_currency(outcome.payrun.total_amount),
                duration_us = start_time.elapsed().as_micros(),
                "Payrun request completed"
            );
            json_ok(StatusCode::CREATED, outcome)
        }
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for `GET /payruns`.
async fn list_payruns_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().list_payruns().await {
        Ok(payruns) => json_ok(StatusCode::OK, payruns),
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for `GET /payslips`.
async fn list_payslips_handler(
    State(state): State<AppState>,
    query: Result<Query<PayslipQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let filter: PayslipFilter = match query {
        Ok(Query(query)) => query.into(),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query string error"
            );
            return ApiErrorResponse::bad_request(ApiError::invalid_query(rejection.body_text()))
                .into_response();
        }
    };

    match state.store().list_payslips(&filter).await {
        Ok(payslips) => {
            info!(
                correlation_id = %correlation_id,
                count = payslips.len(),
                "Listed payslips"
            );
            json_ok(StatusCode::OK, payslips)
        }
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for `POST /salary/calculate`.
///
/// Previews the salary breakdown for a wage without touching the store.
async fn calculate_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_error(rejection, correlation_id).into_response(),
    };

    if request.monthly_wage < Decimal::ZERO {
        let err = EngineError::InvalidEmployee {
            field: "monthly_wage".to_string(),
            message: format!("must not be negative, got {}", request.monthly_wage),
        };
        return engine_error(err, correlation_id);
    }

    let config = state.config();
    let breakdown = match request.payable_days {
        Some(days) => calculate_salary_with_attendance(
            request.monthly_wage,
            days,
            config.payrun_settings().total_working_days,
            config.salary_structure(),
        ),
        None => calculate_salary(request.monthly_wage, config.salary_structure()),
    };

    info!(
        correlation_id = %correlation_id,
        payable_days = ?request.payable_days,
        net_salary = %breakdown.net_salary,
        "Salary calculated"
    );
    json_ok(StatusCode::OK, breakdown)
}

/// Handler for `POST /attendance/:id/check-out`.
async fn check_out_handler(
    State(state): State<AppState>,
    Path(attendance_id): Path<String>,
    payload: Result<Json<CheckOutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_error(rejection, correlation_id).into_response(),
    };

    let at = request.at.unwrap_or_else(Utc::now);
    match state.service().check_out(&attendance_id, at).await {
        Ok(record) => json_ok(StatusCode::OK, record),
        Err(err) => engine_error(err, correlation_id),
    }
}
