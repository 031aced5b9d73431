//! Request types for the Payroll Engine API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::PayslipFilter;

/// Request body for `POST /payruns`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayrunRequest {
    /// English month name or its three-letter abbreviation, e.g. "January".
    pub month: String,
    /// Calendar year.
    pub year: i32,
    /// User who triggered the payrun.
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Request body for `POST /salary/calculate`.
///
/// Without `payable_days` the full monthly breakdown is returned; with it the
/// breakdown is pro-rated against the configured working days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryCalculationRequest {
    /// Monthly wage in whole currency units.
    pub monthly_wage: Decimal,
    /// Days to pay for.
    #[serde(default)]
    pub payable_days: Option<u32>,
}

/// Request body for `POST /attendance/:id/check-out`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckOutRequest {
    /// Check-out time. Defaults to the time the request is handled.
    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
}

/// Query string for `GET /payslips`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayslipQuery {
    /// Only payslips for this employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Only payslips for this month name.
    #[serde(default)]
    pub month: Option<String>,
    /// Only payslips for this year.
    #[serde(default)]
    pub year: Option<i32>,
}

impl From<PayslipQuery> for PayslipFilter {
    fn from(query: PayslipQuery) -> Self {
        PayslipFilter {
            employee_id: query.employee_id,
            month: query.month,
            year: query.year,
        }
    }
}
