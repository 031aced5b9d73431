//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentStatus enum
//! for representing the workers a payrun is calculated for.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents where an employee stands in their employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Currently employed and included in payruns.
    Active,
    /// Employed but away on extended leave; excluded from payruns.
    OnLeave,
    /// No longer employed; excluded from payruns.
    Inactive,
}

/// Represents an employee as read from the payroll store.
///
/// Only the identifier, wage and status take part in payroll arithmetic;
/// the remaining fields are carried so records round-trip through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Monthly wage in whole rupees. A missing wage is paid as zero.
    #[serde(default)]
    pub monthly_wage: Option<Decimal>,
    /// The employee's current employment status.
    pub status: EmploymentStatus,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Work email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Department the employee belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Employee {
    /// Creates an employee with only the fields payroll needs.
    pub fn new(id: impl Into<String>, monthly_wage: Option<Decimal>, status: EmploymentStatus) -> Self {
        Self {
            id: id.into(),
            monthly_wage,
            status,
            first_name: None,
            last_name: None,
            email: None,
            department: None,
            position: None,
        }
    }

    /// Returns true if the employee takes part in payruns.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmploymentStatus};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("emp_1", Some(Decimal::from(50000)), EmploymentStatus::Active);
    /// assert!(employee.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }

    /// Returns the wage to calculate with, treating a missing wage as zero.
    pub fn wage(&self) -> Decimal {
        self.monthly_wage.unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_store_employee_ignores_unknown_fields() {
        let json = r#"{
            "id": "emp_1",
            "user_id": "user_4",
            "first_name": "Sarah",
            "last_name": "Williams",
            "email": "employee@workzen.com",
            "department": "Engineering",
            "position": "Software Engineer",
            "bank_name": "HDFC Bank",
            "monthly_wage": 50000,
            "status": "active"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_1");
        assert_eq!(employee.monthly_wage, Some(Decimal::from(50000)));
        assert_eq!(employee.status, EmploymentStatus::Active);
        assert_eq!(employee.first_name.as_deref(), Some("Sarah"));
    }

    #[test]
    fn test_missing_wage_is_zero() {
        let json = r#"{"id": "emp_9", "status": "active"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.monthly_wage, None);
        assert_eq!(employee.wage(), Decimal::ZERO);
    }

    #[test]
    fn test_only_active_employees_are_active() {
        let active = Employee::new("a", None, EmploymentStatus::Active);
        let on_leave = Employee::new("b", None, EmploymentStatus::OnLeave);
        let inactive = Employee::new("c", None, EmploymentStatus::Inactive);

        assert!(active.is_active());
        assert!(!on_leave.is_active());
        assert!(!inactive.is_active());
    }

    #[test]
    fn test_employment_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }
}
