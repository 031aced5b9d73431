//! Payrun batch calculation.
//!
//! This module runs the salary, attendance and proration steps for every
//! active employee in a month and assembles the resulting payslips and the
//! payrun summary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::models::{AttendanceRecord, Employee, LeaveRecord, PayMonth, Payrun, Payslip};

use super::attendance::compute_attendance_inputs;
use super::proration::{calculate_payable_days, calculate_salary_with_attendance};

/// The records produced by one payrun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrunOutcome {
    /// The payrun summary.
    pub payrun: Payrun,
    /// One payslip per active employee, in input order.
    pub payslips: Vec<Payslip>,
}

/// Builds the payslip for a single employee and month.
///
/// The employee's status is not checked here; callers select who is paid.
///
/// # Arguments
///
/// * `employee` - The employee to pay (a missing wage is paid as zero)
/// * `month` - The month being paid
/// * `attendance` - Attendance records to aggregate from
/// * `leaves` - Leave records to aggregate from
/// * `config` - Salary structure and working days
/// * `created_at` - Timestamp stamped on the payslip
pub fn build_payslip(
    employee: &Employee,
    month: &PayMonth,
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRecord],
    config: &PayrollConfig,
    created_at: DateTime<Utc>,
) -> Payslip {
    let total_working_days = config.payrun().total_working_days;

    let inputs = compute_attendance_inputs(&employee.id, month, attendance, leaves);
    let payable_days = calculate_payable_days(
        inputs.attendance_days,
        inputs.paid_leave_days,
        total_working_days,
    );
    let breakdown = calculate_salary_with_attendance(
        employee.wage(),
        payable_days,
        total_working_days,
        config.salary(),
    );

    debug!(
        employee_id = %employee.id,
        attendance_days = inputs.attendance_days,
        paid_leave_days = inputs.paid_leave_days,
        payable_days,
        net_salary = %breakdown.net_salary,
        "Calculated payslip"
    );

    Payslip {
        id: format!("ps_{}", Uuid::new_v4().simple()),
        employee_id: employee.id.clone(),
        month: month.name().to_string(),
        year: month.year(),
        breakdown,
        payable_days,
        attendance_days: inputs.attendance_days,
        paid_leave_days: inputs.paid_leave_days,
        total_working_days,
        created_at,
    }
}

/// Builds the payrun summary for a set of payslips.
pub fn summarize_payrun(
    month: &PayMonth,
    created_by: Option<&str>,
    payslips: &[Payslip],
    created_at: DateTime<Utc>,
) -> Payrun {
    let total_amount: Decimal = payslips.iter().map(Payslip::net_salary).sum();

    Payrun {
        id: format!("pr_{}", Uuid::new_v4().simple()),
        month: month.name().to_string(),
        year: month.year(),
        created_by: created_by.map(str::to_string),
        created_at,
        total_employees: payslips.len() as u32,
        total_amount,
    }
}

/// Runs payroll for every active employee in a month.
///
/// Employees that are on leave or inactive are skipped. Each active employee is
/// calculated independently; the payrun totals the net salary of all payslips.
/// Calling this twice for the same month produces two independent payruns.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::create_payrun;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{Employee, EmploymentStatus, PayMonth};
/// use rust_decimal::Decimal;
///
/// let employees = vec![
///     Employee::new("emp_1", Some(Decimal::from(50000)), EmploymentStatus::Active),
///     Employee::new("emp_2", Some(Decimal::from(48000)), EmploymentStatus::OnLeave),
/// ];
/// let month = PayMonth::parse("January", 2025).unwrap();
///
/// let outcome = create_payrun(&month, Some("user_3"), &employees, &[], &[], &PayrollConfig::default());
///
/// assert_eq!(outcome.payslips.len(), 1);
/// assert_eq!(outcome.payrun.total_employees, 1);
/// // No attendance recorded, so nothing is payable.
/// assert_eq!(outcome.payrun.total_amount, Decimal::ZERO);
/// ```
pub fn create_payrun(
    month: &PayMonth,
    created_by: Option<&str>,
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRecord],
    config: &PayrollConfig,
) -> PayrunOutcome {
    let created_at = Utc::now();

    let payslips: Vec<Payslip> = employees
        .iter()
        .filter(|employee| employee.is_active())
        .map(|employee| build_payslip(employee, month, attendance, leaves, config, created_at))
        .collect();

    let payrun = summarize_payrun(month, created_by, &payslips, created_at);

    PayrunOutcome { payrun, payslips }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, EmploymentStatus, LeaveStatus, LeaveType};
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn january() -> PayMonth {
        PayMonth::parse("January", 2025).unwrap()
    }

    fn employee(id: &str, wage: i64, status: EmploymentStatus) -> Employee {
        Employee::new(id, Some(Decimal::from(wage)), status)
    }

    fn present_days(employee_id: &str, days: u32) -> Vec<AttendanceRecord> {
        (1..=days)
            .map(|day| {
                AttendanceRecord::new(
                    format!("att_{}_{}", employee_id, day),
                    employee_id,
                    d(day),
                    AttendanceStatus::Present,
                )
            })
            .collect()
    }

    #[test]
    fn test_only_active_employees_get_payslips() {
        let employees = vec![
            employee("emp_1", 50000, EmploymentStatus::Active),
            employee("emp_2", 75000, EmploymentStatus::Active),
            employee("emp_3", 48000, EmploymentStatus::Inactive),
            employee("emp_4", 45000, EmploymentStatus::OnLeave),
        ];

        let outcome = create_payrun(&january(), None, &employees, &[], &[], &PayrollConfig::default());

        assert_eq!(outcome.payslips.len(), 2);
        assert_eq!(outcome.payrun.total_employees, 2);
        let ids: Vec<&str> = outcome.payslips.iter().map(|p| p.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["emp_1", "emp_2"]);
    }

    #[test]
    fn test_no_attendance_pays_zero() {
        let employees = vec![employee("emp_1", 50000, EmploymentStatus::Active)];

        let outcome = create_payrun(&january(), None, &employees, &[], &[], &PayrollConfig::default());

        let payslip = &outcome.payslips[0];
        assert_eq!(payslip.payable_days, 0);
        assert_eq!(payslip.net_salary(), Decimal::ZERO);
        assert_eq!(payslip.breakdown.professional_tax, Decimal::ZERO);
    }

    #[test]
    fn test_attendance_and_leave_feed_payable_days() {
        let employees = vec![employee("emp_1", 50000, EmploymentStatus::Active)];
        let attendance = present_days("emp_1", 20);
        let leaves = vec![LeaveRecord::new(
            "to_1",
            "emp_1",
            LeaveType::Paid,
            LeaveStatus::Approved,
            d(27),
            d(29),
        )];

        let outcome = create_payrun(
            &january(),
            Some("user_3"),
            &employees,
            &attendance,
            &leaves,
            &PayrollConfig::default(),
        );

        let payslip = &outcome.payslips[0];
        assert_eq!(payslip.attendance_days, 20);
        assert_eq!(payslip.paid_leave_days, 3);
        assert_eq!(payslip.payable_days, 23);
        assert_eq!(payslip.total_working_days, 30);
        assert_eq!(payslip.net_salary(), Decimal::from(35833));
        assert_eq!(payslip.month, "January");
        assert_eq!(payslip.year, 2025);
        assert_eq!(outcome.payrun.created_by.as_deref(), Some("user_3"));
    }

    #[test]
    fn test_full_month_is_capped_at_working_days() {
        let employees = vec![employee("emp_1", 50000, EmploymentStatus::Active)];
        let attendance = present_days("emp_1", 31);

        let outcome = create_payrun(&january(), None, &employees, &attendance, &[], &PayrollConfig::default());

        assert_eq!(outcome.payslips[0].attendance_days, 31);
        assert_eq!(outcome.payslips[0].payable_days, 30);
        assert_eq!(outcome.payslips[0].net_salary(), Decimal::from(46800));
    }

    #[test]
    fn test_total_amount_sums_net_salaries() {
        let employees = vec![
            employee("emp_1", 50000, EmploymentStatus::Active),
            employee("emp_2", 75000, EmploymentStatus::Active),
        ];
        let mut attendance = present_days("emp_1", 30);
        attendance.extend(present_days("emp_2", 30));

        let outcome = create_payrun(&january(), None, &employees, &attendance, &[], &PayrollConfig::default());

        assert_eq!(outcome.payrun.total_amount, Decimal::from(46800 + 70300));
        assert_eq!(outcome.payrun.month, "January");
    }

    #[test]
    fn test_missing_wage_is_paid_as_zero_wage() {
        let employees = vec![Employee::new("emp_1", None, EmploymentStatus::Active)];
        let attendance = present_days("emp_1", 30);

        let outcome = create_payrun(&january(), None, &employees, &attendance, &[], &PayrollConfig::default());

        // Only the standard allowance and professional tax remain.
        assert_eq!(outcome.payslips[0].net_salary(), Decimal::from(3967));
    }

    #[test]
    fn test_repeated_runs_create_distinct_records() {
        let employees = vec![employee("emp_1", 50000, EmploymentStatus::Active)];
        let config = PayrollConfig::default();

        let first = create_payrun(&january(), None, &employees, &[], &[], &config);
        let second = create_payrun(&january(), None, &employees, &[], &[], &config);

        assert_ne!(first.payrun.id, second.payrun.id);
        assert_ne!(first.payslips[0].id, second.payslips[0].id);
    }

    #[test]
    fn test_empty_employee_list() {
        let outcome = create_payrun(&january(), None, &[], &[], &[], &PayrollConfig::default());

        assert!(outcome.payslips.is_empty());
        assert_eq!(outcome.payrun.total_employees, 0);
        assert_eq!(outcome.payrun.total_amount, Decimal::ZERO);
    }
}
