//! Persistence boundary for payroll inputs and results.
//!
//! The engine reads employees, attendance and leave through [`PayrollStore`]
//! and writes payslips and payruns back through it. [`InMemoryStore`] is the
//! bundled implementation, seedable from a JSON document.

mod memory;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Employee, LeaveRecord, Payrun, Payslip};

pub use memory::{InMemoryStore, SeedData};

/// Filters applied when listing payslips. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayslipFilter {
    /// Only payslips issued to this employee.
    pub employee_id: Option<String>,
    /// Only payslips for this month name (case-insensitive).
    pub month: Option<String>,
    /// Only payslips for this year.
    pub year: Option<i32>,
}

impl PayslipFilter {
    /// Returns true if the payslip passes every set filter.
    pub fn matches(&self, payslip: &Payslip) -> bool {
        self.employee_id
            .as_ref()
            .is_none_or(|id| &payslip.employee_id == id)
            && self
                .month
                .as_ref()
                .is_none_or(|month| payslip.month.eq_ignore_ascii_case(month))
            && self.year.is_none_or(|year| payslip.year == year)
    }
}

/// Read and write access to the records a payrun works with.
///
/// Every operation may fail with [`crate::error::EngineError::Store`].
#[async_trait]
pub trait PayrollStore: Send + Sync {
    /// Lists all employees, whatever their status.
    async fn list_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Lists all attendance records.
    async fn list_attendance(&self) -> EngineResult<Vec<AttendanceRecord>>;

    /// Lists all leave records.
    async fn list_leaves(&self) -> EngineResult<Vec<LeaveRecord>>;

    /// Persists an attendance record, replacing any record with the same id.
    async fn save_attendance(&self, record: &AttendanceRecord) -> EngineResult<()>;

    /// Persists a payslip.
    async fn create_payslip(&self, payslip: &Payslip) -> EngineResult<()>;

    /// Persists a payrun summary.
    async fn create_payrun(&self, payrun: &Payrun) -> EngineResult<()>;

    /// Lists payslips passing the filter, newest first.
    async fn list_payslips(&self, filter: &PayslipFilter) -> EngineResult<Vec<Payslip>>;

    /// Lists payruns, newest first.
    async fn list_payruns(&self) -> EngineResult<Vec<Payrun>>;
}
