//! Time-off (leave) request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category of leave requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid leave.
    Paid,
    /// Sick leave (paid).
    Sick,
    /// Unpaid leave.
    Unpaid,
}

impl LeaveType {
    /// Returns true if days of this leave are payable.
    pub fn is_payable(&self) -> bool {
        matches!(self, LeaveType::Paid | LeaveType::Sick)
    }
}

/// Where a leave request stands in its approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved by HR or an administrator.
    Approved,
    /// Rejected by HR or an administrator.
    Rejected,
}

/// A leave request covering an inclusive date range.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{LeaveRecord, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
///
/// let leave = LeaveRecord::new(
///     "to_1",
///     "emp_1",
///     LeaveType::Paid,
///     LeaveStatus::Approved,
///     NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 22).unwrap(),
/// );
/// assert_eq!(leave.span_days(), 3);
/// assert!(leave.counts_as_paid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee requesting leave.
    pub employee_id: String,
    /// The leave category.
    #[serde(rename = "type", alias = "leave_type")]
    pub leave_type: LeaveType,
    /// The approval status.
    pub status: LeaveStatus,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Duration recorded when the request was filed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    /// Free-text reason given by the employee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The user who approved or rejected the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

impl LeaveRecord {
    /// Creates a leave record without the optional request details.
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        leave_type: LeaveType,
        status: LeaveStatus,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            leave_type,
            status,
            start_date,
            end_date,
            days: None,
            reason: None,
            approved_by: None,
        }
    }

    /// Returns `(end_date - start_date) + 1` in whole days.
    ///
    /// Reversed ranges yield zero or a negative count.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns the duration shown on a time-off request: the absolute
    /// distance between the two dates plus one.
    pub fn requested_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().abs() + 1
    }

    /// Returns true if this leave is approved and of a payable category.
    pub fn counts_as_paid(&self) -> bool {
        self.status == LeaveStatus::Approved && self.leave_type.is_payable()
    }
}
