//! Attendance and paid leave aggregation.
//!
//! This module counts, for one employee and one pay month, the days marked
//! present and the days of approved paid or sick leave that feed payable days.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{AttendanceRecord, LeaveRecord, PayMonth};

/// The attendance inputs to a payable-days calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceInputs {
    /// Days marked present within the month.
    pub attendance_days: u32,
    /// Days of approved paid or sick leave starting within the month.
    pub paid_leave_days: u32,
}

/// Aggregates an employee's attendance and paid leave over a pay month.
///
/// # Arguments
///
/// * `employee_id` - The employee to aggregate for
/// * `month` - The pay month to aggregate over
/// * `attendance` - Attendance records, for any employees and dates
/// * `leaves` - Leave records, for any employees and dates
///
/// # Rules
///
/// - `attendance_days` counts the employee's records with status `present`
///   dated within the month.
/// - `paid_leave_days` sums `(end_date - start_date) + 1` over the employee's
///   approved `paid` or `sick` leaves whose start date is within the month.
///   The span is taken whole, even when it runs past the end of the month.
///   A leave whose end date precedes its start date contributes nothing.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_attendance_inputs;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus, LeaveRecord, LeaveStatus, LeaveType, PayMonth};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
/// let attendance = vec![
///     AttendanceRecord::new("a1", "emp_1", d(6), AttendanceStatus::Present),
///     AttendanceRecord::new("a2", "emp_1", d(7), AttendanceStatus::Absent),
/// ];
/// let leaves = vec![
///     LeaveRecord::new("l1", "emp_1", LeaveType::Sick, LeaveStatus::Approved, d(20), d(21)),
/// ];
///
/// let month = PayMonth::parse("January", 2025).unwrap();
/// let inputs = compute_attendance_inputs("emp_1", &month, &attendance, &leaves);
/// assert_eq!(inputs.attendance_days, 1);
/// assert_eq!(inputs.paid_leave_days, 2);
/// ```
pub fn compute_attendance_inputs(
    employee_id: &str,
    month: &PayMonth,
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRecord],
) -> AttendanceInputs {
    let attendance_days = attendance
        .iter()
        .filter(|record| {
            record.employee_id == employee_id && record.is_present() && month.contains_date(record.date)
        })
        .count() as u32;

    let paid_leave_days = leaves
        .iter()
        .filter(|leave| {
            leave.employee_id == employee_id
                && leave.counts_as_paid()
                && month.contains_date(leave.start_date)
        })
        .map(|leave| {
            let span = leave.span_days();
            if span <= 0 {
                warn!(
                    leave_id = %leave.id,
                    employee_id = %leave.employee_id,
                    start_date = %leave.start_date,
                    end_date = %leave.end_date,
                    "Leave ends before it starts, counting zero days"
                );
                0
            } else {
                u32::try_from(span).unwrap_or(u32::MAX)
            }
        })
        .fold(0u32, |total, days| total.saturating_add(days));

    AttendanceInputs {
        attendance_days,
        paid_leave_days,
    }
}
