//! In-memory payroll store.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee, LeaveRecord, Payrun, Payslip};

use super::{PayrollStore, PayslipFilter};

/// The collections a store can be seeded with.
///
/// Shaped like the HRMS mock database: other top-level collections
/// (users, leave balances, company settings) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    /// Employee records.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Attendance records.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Time-off requests.
    #[serde(default, alias = "leaves")]
    pub time_offs: Vec<LeaveRecord>,
    /// Previously issued payslips.
    #[serde(default)]
    pub payslips: Vec<Payslip>,
    /// Previously created payruns.
    #[serde(default)]
    pub payruns: Vec<Payrun>,
}

/// A [`PayrollStore`] holding every collection in memory.
///
/// Records are kept in insertion order; inserting a record whose id already
/// exists replaces it in place.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, EmploymentStatus};
/// use payroll_engine::store::{InMemoryStore, PayrollStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = InMemoryStore::default();
/// store.insert_employee(Employee::new("emp_1", None, EmploymentStatus::Active)).await;
/// assert_eq!(store.list_employees().await.unwrap().len(), 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<SeedData>,
}

impl InMemoryStore {
    /// Creates a store holding the given records.
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            data: RwLock::new(seed),
        }
    }

    /// Loads a seed document from a JSON file.
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;
        let seed: SeedData =
            serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        info!(
            path = %path_str,
            employees = seed.employees.len(),
            attendance = seed.attendance.len(),
            time_offs = seed.time_offs.len(),
            "Loaded seed data"
        );

        Ok(Self::from_seed(seed))
    }

    /// Inserts or replaces an employee.
    pub async fn insert_employee(&self, employee: Employee) {
        let mut data = self.data.write().await;
        upsert(&mut data.employees, employee, |e| &e.id);
    }

    /// Inserts or replaces an attendance record.
    pub async fn insert_attendance(&self, record: AttendanceRecord) {
        let mut data = self.data.write().await;
        upsert(&mut data.attendance, record, |r| &r.id);
    }

    /// Inserts or replaces a leave record.
    pub async fn insert_leave(&self, leave: LeaveRecord) {
        let mut data = self.data.write().await;
        upsert(&mut data.time_offs, leave, |l| &l.id);
    }

    /// Returns a copy of everything in the store.
    pub async fn snapshot(&self) -> SeedData {
        self.data.read().await.clone()
    }
}

fn upsert<T>(records: &mut Vec<T>, record: T, id: impl Fn(&T) -> &String) {
    match records.iter().position(|existing| id(existing) == id(&record)) {
        Some(index) => records[index] = record,
        None => records.push(record),
    }
}

#[async_trait]
impl PayrollStore for InMemoryStore {
    async fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.data.read().await.employees.clone())
    }

    async fn list_attendance(&self) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self.data.read().await.attendance.clone())
    }

    async fn list_leaves(&self) -> EngineResult<Vec<LeaveRecord>> {
        Ok(self.data.read().await.time_offs.clone())
    }

    async fn save_attendance(&self, record: &AttendanceRecord) -> EngineResult<()> {
        self.insert_attendance(record.clone()).await;
        Ok(())
    }

    async fn create_payslip(&self, payslip: &Payslip) -> EngineResult<()> {
        self.data.write().await.payslips.push(payslip.clone());
        Ok(())
    }

    async fn create_payrun(&self, payrun: &Payrun) -> EngineResult<()> {
        self.data.write().await.payruns.push(payrun.clone());
        Ok(())
    }

    async fn list_payslips(&self, filter: &PayslipFilter) -> EngineResult<Vec<Payslip>> {
        let data = self.data.read().await;
        Ok(data
            .payslips
            .iter()
            .rev()
            .filter(|payslip| filter.matches(payslip))
            .cloned()
            .collect())
    }

    async fn list_payruns(&self) -> EngineResult<Vec<Payrun>> {
        Ok(self.data.read().await.payruns.iter().rev().cloned().collect())
    }
}
