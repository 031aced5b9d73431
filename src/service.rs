//! Store-backed payroll operations.
//!
//! [`PayrollService`] runs the same batch as [`crate::calculation::create_payrun`]
//! but reads its inputs from a [`PayrollStore`] and writes each payslip back as
//! soon as it is computed. It also closes attendance records on check-out.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::calculation::{PayrunOutcome, build_payslip, summarize_payrun};
use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, PayMonth, format_currency};
use crate::store::PayrollStore;

/// Runs payrolls against a store.
#[derive(Clone)]
pub struct PayrollService {
    store: Arc<dyn PayrollStore>,
    config: PayrollConfig,
}

impl PayrollService {
    /// Creates a service over the given store and configuration.
    pub fn new(store: Arc<dyn PayrollStore>, config: PayrollConfig) -> Self {
        Self { store, config }
    }

    /// Returns the configuration payslips are calculated with.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Runs payroll for every active employee and persists the results.
    ///
    /// Payslips are written one at a time in employee order. The payrun is
    /// written only after every payslip has been stored. The first store error
    /// is returned immediately and payslips already written are left in place.
    pub async fn run(&self, month: &PayMonth, created_by: Option<&str>) -> EngineResult<PayrunOutcome> {
        let start_time = Instant::now();
        let created_at = Utc::now();

        let employees = self.store.list_employees().await?;
        let attendance = self.store.list_attendance().await?;
        let leaves = self.store.list_leaves().await?;

        let mut payslips = Vec::new();
        for employee in employees.iter().filter(|e| e.is_active()) {
            let payslip = build_payslip(employee, month, &attendance, &leaves, &self.config, created_at);
            self.store.create_payslip(&payslip).await?;
            payslips.push(payslip);
        }

        let payrun = summarize_payrun(month, created_by, &payslips, created_at);
        self.store.create_payrun(&payrun).await?;

        info!(
            payrun_id = %payrun.id,
            month = %payrun.month,
            year = payrun.year,
            total_employees = payrun.total_employees,
            total_amount = %format_currency(payrun.total_amount),
            duration_us = start_time.elapsed().as_micros(),
            "Payrun completed"
        );

        Ok(PayrunOutcome { payrun, payslips })
    }

    /// Checks an attendance record out at `at` and persists it.
    ///
    /// Work hours run from the record's check-in and extra hours are measured
    /// against the configured standard working day.
    pub async fn check_out(&self, attendance_id: &str, at: DateTime<Utc>) -> EngineResult<AttendanceRecord> {
        let mut record = self
            .store
            .list_attendance()
            .await?
            .into_iter()
            .find(|record| record.id == attendance_id)
            .ok_or_else(|| EngineError::AttendanceNotFound {
                id: attendance_id.to_string(),
            })?;

        record.check_out(at, self.config.payrun().standard_work_hours);
        self.store.save_attendance(&record).await?;

        info!(
            attendance_id = %record.id,
            employee_id = %record.employee_id,
            work_hours = ?record.work_hours,
            extra_hours = ?record.extra_hours,
            "Attendance checked out"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CompanyProfile, PayrunSettings, SalaryStructure};
    use crate::models::{
        AttendanceRecord, AttendanceStatus, Employee, EmploymentStatus, LeaveRecord, Payrun, Payslip,
    };
    use crate::store::{InMemoryStore, PayslipFilter, SeedData};
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone};
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Delegates to an in-memory store but fails the nth payslip write.
    struct FailingStore {
        inner: InMemoryStore,
        fail_on_payslip: usize,
        payslip_writes: AtomicUsize,
    }

    #[async_trait]
    impl PayrollStore for FailingStore {
        async fn list_employees(&self) -> EngineResult<Vec<Employee>> {
            self.inner.list_employees().await
        }

        async fn list_attendance(&self) -> EngineResult<Vec<AttendanceRecord>> {
            self.inner.list_attendance().await
        }

        async fn list_leaves(&self) -> EngineResult<Vec<LeaveRecord>> {
            self.inner.list_leaves().await
        }

        async fn create_payslip(&self, payslip: &Payslip) -> EngineResult<()> {
            let write = self.payslip_writes.fetch_add(1, Ordering::SeqCst) + 1;
            if write == self.fail_on_payslip {
                return Err(EngineError::store("create_payslip", "disk full"));
            }
            self.inner.create_payslip(payslip).await
        }

        async fn create_payrun(&self, payrun: &Payrun) -> EngineResult<()> {
            self.inner.create_payrun(payrun).await
        }

        async fn list_payslips(&self, filter: &PayslipFilter) -> EngineResult<Vec<Payslip>> {
            self.inner.list_payslips(filter).await
        }

        async fn list_payruns(&self) -> EngineResult<Vec<Payrun>> {
            self.inner.list_payruns().await
        }

        async fn save_attendance(&self, record: &AttendanceRecord) -> EngineResult<()> {
            self.inner.save_attendance(record).await
        }
    }

    fn seed() -> SeedData {
        let employees = vec![
            Employee::new("emp_1", Some(Decimal::from(50000)), EmploymentStatus::Active),
            Employee::new("emp_2", Some(Decimal::from(75000)), EmploymentStatus::Active),
            Employee::new("emp_3", Some(Decimal::from(45000)), EmploymentStatus::Active),
            Employee::new("emp_4", Some(Decimal::from(48000)), EmploymentStatus::Inactive),
        ];
        let attendance = (1..=30)
            .map(|day| {
                AttendanceRecord::new(
                    format!("att_{}", day),
                    "emp_1",
                    NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
                    AttendanceStatus::Present,
                )
            })
            .collect();
        SeedData {
            employees,
            attendance,
            ..SeedData::default()
        }
    }

    fn january() -> PayMonth {
        PayMonth::parse("January", 2025).unwrap()
    }

    #[tokio::test]
    async fn test_run_persists_payslips_and_payrun() {
        let store = Arc::new(InMemoryStore::from_seed(seed()));
        let service = PayrollService::new(store.clone(), PayrollConfig::default());

        let outcome = service.run(&january(), Some("user_3")).await.unwrap();

        assert_eq!(outcome.payslips.len(), 3);
        assert_eq!(outcome.payrun.total_employees, 3);
        assert_eq!(outcome.payrun.total_amount, Decimal::from(46800));

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.payslips.len(), 3);
        assert_eq!(snapshot.payruns.len(), 1);
        assert_eq!(snapshot.payruns[0].id, outcome.payrun.id);
        assert_eq!(snapshot.payruns[0].created_by.as_deref(), Some("user_3"));
    }

    #[tokio::test]
    async fn test_store_failure_aborts_without_rollback() {
        let store = Arc::new(FailingStore {
            inner: InMemoryStore::from_seed(seed()),
            fail_on_payslip: 2,
            payslip_writes: AtomicUsize::new(0),
        });
        let service = PayrollService::new(store.clone(), PayrollConfig::default());

        let result = service.run(&january(), None).await;

        match result {
            Err(EngineError::Store { operation, .. }) => assert_eq!(operation, "create_payslip"),
            other => panic!("Expected store error, got {:?}", other.map(|o| o.payrun.id)),
        }

        let snapshot = store.inner.snapshot().await;
        assert_eq!(snapshot.payslips.len(), 1);
        assert_eq!(snapshot.payslips[0].employee_id, "emp_1");
        assert!(snapshot.payruns.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_runs_are_not_deduplicated() {
        let store = Arc::new(InMemoryStore::from_seed(seed()));
        let service = PayrollService::new(store.clone(), PayrollConfig::default());

        service.run(&january(), None).await.unwrap();
        service.run(&january(), None).await.unwrap();

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.payslips.len(), 6);
        assert_eq!(snapshot.payruns.len(), 2);
    }

    fn checked_in_store() -> Arc<InMemoryStore> {
        let mut record = AttendanceRecord::new(
            "att_9",
            "emp_1",
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            AttendanceStatus::Present,
        );
        record.check_in = Some(Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap());
        Arc::new(InMemoryStore::from_seed(SeedData {
            attendance: vec![record],
            ..SeedData::default()
        }))
    }

    #[tokio::test]
    async fn test_check_out_uses_configured_standard_hours() {
        let store = checked_in_store();
        let config = PayrollConfig::new(
            CompanyProfile::default(),
            SalaryStructure::default(),
            PayrunSettings {
                standard_work_hours: Decimal::from(9),
                ..PayrunSettings::default()
            },
        );
        let service = PayrollService::new(store.clone(), config);
        let at = Utc.with_ymd_and_hms(2025, 1, 6, 19, 30, 0).unwrap();

        let record = service.check_out("att_9", at).await.unwrap();

        assert_eq!(record.work_hours, Some(Decimal::new(105, 1)));
        assert_eq!(record.extra_hours, Some(Decimal::new(15, 1)));

        let stored = store.list_attendance().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].check_out, Some(at));
        assert_eq!(stored[0].extra_hours, Some(Decimal::new(15, 1)));
    }

    #[tokio::test]
    async fn test_check_out_unknown_record_is_not_found() {
        let service = PayrollService::new(checked_in_store(), PayrollConfig::default());
        let at = Utc.with_ymd_and_hms(2025, 1, 6, 17, 0, 0).unwrap();

        match service.check_out("att_404", at).await {
            Err(EngineError::AttendanceNotFound { id }) => assert_eq!(id, "att_404"),
            other => panic!("Expected attendance not found, got {:?}", other),
        }
    }
}
