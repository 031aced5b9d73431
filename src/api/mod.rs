//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST endpoints for running payrolls, listing
//! payruns and payslips, previewing a salary breakdown and checking out
//! attendance records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CheckOutRequest, CreatePayrunRequest, PayslipQuery, SalaryCalculationRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
