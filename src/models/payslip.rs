//! Payslip and payrun records.
//!
//! This module contains the [`Payslip`] and [`Payrun`] types produced by a
//! payrun and handed to the payroll store for persistence.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryBreakdown;

/// A per-employee, per-month record of the computed salary.
///
/// The salary breakdown is flattened into the payslip so the stored record
/// carries every component at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for the payslip.
    pub id: String,
    /// The employee the payslip was issued to.
    pub employee_id: String,
    /// English month name (e.g., "January").
    pub month: String,
    /// Calendar year.
    pub year: i32,
    /// The (possibly prorated) salary breakdown.
    #[serde(flatten)]
    pub breakdown: SalaryBreakdown,
    /// Days the employee is paid for.
    pub payable_days: u32,
    /// Days marked present in the month.
    pub attendance_days: u32,
    /// Days of approved paid or sick leave starting in the month.
    pub paid_leave_days: u32,
    /// Working days the month is prorated over.
    pub total_working_days: u32,
    /// When the payslip was created.
    pub created_at: DateTime<Utc>,
}

impl Payslip {
    /// Returns the net salary paid on this payslip.
    pub fn net_salary(&self) -> Decimal {
        self.breakdown.net_salary
    }
}

/// A summary of one payrun batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payrun {
    /// Unique identifier for the payrun.
    pub id: String,
    /// English month name (e.g., "January").
    pub month: String,
    /// Calendar year.
    pub year: i32,
    /// The user who started the payrun.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// When the payrun was created.
    pub created_at: DateTime<Utc>,
    /// Number of employees paid.
    pub total_employees: u32,
    /// Sum of net salaries across the batch.
    pub total_amount: Decimal,
}
