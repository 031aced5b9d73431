//! Salary breakdown model.
//!
//! This module contains the [`SalaryBreakdown`] value object produced by the
//! salary calculator, and a rupee formatter for reporting amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_currency;

/// A monthly salary split into earnings and deductions.
///
/// All amounts are whole rupees. The totals always satisfy:
/// - `gross_earnings = basic + hra + standard_allowance + performance_bonus + lta + fixed_allowance`
///   (for a full month)
/// - `total_deductions = pf_employee + professional_tax`
/// - `net_salary = gross_earnings - total_deductions`
///
/// The employer's provident fund contribution is informational and never
/// deducted from net salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Basic salary.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Fixed standard allowance.
    pub standard_allowance: Decimal,
    /// Performance bonus.
    pub performance_bonus: Decimal,
    /// Leave travel allowance.
    pub lta: Decimal,
    /// Remainder that brings earnings up to the wage.
    pub fixed_allowance: Decimal,
    /// Sum of all earnings.
    pub gross_earnings: Decimal,
    /// Employee provident fund contribution.
    pub pf_employee: Decimal,
    /// Employer provident fund contribution.
    pub pf_employer: Decimal,
    /// Professional tax.
    pub professional_tax: Decimal,
    /// Employee PF plus professional tax.
    pub total_deductions: Decimal,
    /// Gross earnings less total deductions.
    pub net_salary: Decimal,
}

impl SalaryBreakdown {
    /// Returns a breakdown with every amount at zero.
    pub fn zero() -> Self {
        Self {
            basic: Decimal::ZERO,
            hra: Decimal::ZERO,
            standard_allowance: Decimal::ZERO,
            performance_bonus: Decimal::ZERO,
            lta: Decimal::ZERO,
            fixed_allowance: Decimal::ZERO,
            gross_earnings: Decimal::ZERO,
            pf_employee: Decimal::ZERO,
            pf_employer: Decimal::ZERO,
            professional_tax: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            net_salary: Decimal::ZERO,
        }
    }

    /// Sums the six earnings components.
    pub fn earnings_sum(&self) -> Decimal {
        self.basic
            + self.hra
            + self.standard_allowance
            + self.performance_bonus
            + self.lta
            + self.fixed_allowance
    }
}

/// Formats a whole-rupee amount with Indian digit grouping.
///
/// # Example
///
/// ```
/// use payroll_engine::models::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(1234567)), "₹12,34,567");
/// assert_eq!(format_currency(Decimal::from(-950)), "-₹950");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let digits = rounded.abs().trunc().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}
