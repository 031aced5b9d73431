//! Calculation logic for the Payroll Engine.
//!
//! This module contains all the calculation functions for determining pay:
//! the salary component breakdown, attendance and paid leave aggregation,
//! attendance-based proration, worked hours on check-out, and the payrun batch
//! that applies them across active employees.

mod attendance;
mod payrun;
mod proration;
mod salary;
mod work_hours;

pub use attendance::{AttendanceInputs, compute_attendance_inputs};
pub use payrun::{PayrunOutcome, build_payslip, create_payrun, summarize_payrun};
pub use proration::{calculate_payable_days, calculate_salary_with_attendance};
pub use salary::{calculate_salary, round_currency};
pub use work_hours::{calculate_extra_hours, calculate_work_hours};
