//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod leave;
mod pay_month;
mod payslip;
mod salary;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{Employee, EmploymentStatus};
pub use leave::{LeaveRecord, LeaveStatus, LeaveType};
pub use pay_month::PayMonth;
pub use payslip::{Payrun, Payslip};
pub use salary::{SalaryBreakdown, format_currency};
