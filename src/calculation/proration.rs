//! Attendance-based salary proration.
//!
//! This module caps attendance and paid leave into payable days and scales a
//! full-month salary breakdown down to the payable portion of the month.

use rust_decimal::Decimal;

use crate::config::SalaryStructure;
use crate::models::SalaryBreakdown;

use super::salary::{calculate_salary, round_currency};

/// Calculates the number of days an employee is paid for.
///
/// Attendance days plus paid leave days, capped at the month's working days.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payable_days;
///
/// assert_eq!(calculate_payable_days(20, 3, 30), 23);
/// assert_eq!(calculate_payable_days(28, 5, 30), 30);
/// ```
pub fn calculate_payable_days(
    attendance_days: u32,
    paid_leave_days: u32,
    total_working_days: u32,
) -> u32 {
    attendance_days
        .saturating_add(paid_leave_days)
        .min(total_working_days)
}

/// Calculates a salary breakdown scaled to the payable days of the month.
///
/// A full month (`payable_days >= total_working_days`) returns the breakdown of
/// [`calculate_salary`] unchanged. Otherwise each earnings and provident fund
/// amount of the full breakdown, gross included, is multiplied by
/// `payable_days / total_working_days` and rounded on its own. Professional tax
/// is not scaled: it is charged in full for any payable day and dropped when
/// there are none.
///
/// A month with zero working days is treated as a full month.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salary_with_attendance;
/// use payroll_engine::config::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let structure = SalaryStructure::default();
/// let breakdown = calculate_salary_with_attendance(Decimal::from(50000), 15, 30, &structure);
///
/// assert_eq!(breakdown.basic, Decimal::from(12500));
/// assert_eq!(breakdown.professional_tax, Decimal::from(200));
/// assert_eq!(breakdown.net_salary, Decimal::from(23300));
/// ```
pub fn calculate_salary_with_attendance(
    monthly_wage: Decimal,
    payable_days: u32,
    total_working_days: u32,
    structure: &SalaryStructure,
) -> SalaryBreakdown {
    let full = calculate_salary(monthly_wage, structure);

    if total_working_days == 0 || payable_days >= total_working_days {
        return full;
    }

    let payable = Decimal::from(payable_days);
    let total = Decimal::from(total_working_days);
    // Multiplying before dividing keeps exact halves exact. Amounts too large
    // for the product fall back to multiplying by the fraction.
    let scale = |amount: Decimal| {
        let scaled = amount
            .checked_mul(payable)
            .map(|product| product / total)
            .unwrap_or_else(|| amount * (payable / total));
        round_currency(scaled)
    };

    let pf_employee = scale(full.pf_employee);
    let professional_tax = if payable_days > 0 {
        full.professional_tax
    } else {
        Decimal::ZERO
    };
    let gross_earnings = scale(full.gross_earnings);
    let total_deductions = pf_employee + professional_tax;

    SalaryBreakdown {
        basic: scale(full.basic),
        hra: scale(full.hra),
        standard_allowance: scale(full.standard_allowance),
        performance_bonus: scale(full.performance_bonus),
        lta: scale(full.lta),
        fixed_allowance: scale(full.fixed_allowance),
        gross_earnings,
        pf_employee,
        pf_employer: scale(full.pf_employer),
        professional_tax,
        total_deductions,
        net_salary: gross_earnings - total_deductions,
    }
}
