//! Attendance record model.
//!
//! One record per employee per day, created on check-in and completed on
//! check-out. Payroll only counts records marked present.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_extra_hours, calculate_work_hours};

/// The attendance outcome for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee checked in.
    Present,
    /// The employee did not attend.
    Absent,
    /// The employee was on leave.
    Leave,
}

/// A daily attendance record.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord::new(
///     "att_1",
///     "emp_1",
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     AttendanceStatus::Present,
/// );
/// assert!(record.is_present());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// Check-in timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<DateTime<Utc>>,
    /// Check-out timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<DateTime<Utc>>,
    /// Hours between check-in and check-out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<Decimal>,
    /// Hours beyond a standard working day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_hours: Option<Decimal>,
    /// The attendance outcome.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Creates a record without check-in details.
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            date,
            check_in: None,
            check_out: None,
            work_hours: None,
            extra_hours: None,
            status,
        }
    }

    /// Returns true if the employee was present on this day.
    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }

    /// Stamps the check-out time and derives worked and extra hours.
    ///
    /// A record that never checked in is stamped with zero hours.
    pub fn check_out(&mut self, at: DateTime<Utc>, standard_hours: Decimal) {
        let work_hours = self
            .check_in
            .map(|check_in| calculate_work_hours(check_in, at))
            .unwrap_or(Decimal::ZERO);

        self.check_out = Some(at);
        self.work_hours = Some(work_hours);
        self.extra_hours = Some(calculate_extra_hours(work_hours, standard_hours));
    }
}
