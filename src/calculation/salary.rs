//! Salary component calculation.
//!
//! This module splits a monthly wage into its salary components following
//! the configured [`SalaryStructure`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::SalaryStructure;
use crate::models::SalaryBreakdown;

/// Rounds an amount to whole rupees, with halves rounded away from zero.
///
/// Every rounded component in the engine goes through this function.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(20825, 1)), Decimal::from(2083));
/// assert_eq!(round_currency(Decimal::new(20824, 1)), Decimal::from(2082));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the full-month salary breakdown for a monthly wage.
///
/// Each step rounds to whole rupees before the next step uses the value, so
/// the fixed allowance absorbs the rounding residue of the other earnings.
///
/// # Arguments
///
/// * `monthly_wage` - The employee's monthly wage in rupees
/// * `structure` - Rates and fixed amounts to apply
///
/// # Steps
///
/// 1. `basic = round(wage * basic_rate)`
/// 2. `hra = round(basic * hra_rate)`
/// 3. `standard_allowance` is the configured constant
/// 4. `performance_bonus = round(basic * bonus_rate)`
/// 5. `lta = round(basic * lta_rate)`
/// 6. `fixed_allowance = max(0, wage - (basic + hra + standard_allowance + performance_bonus + lta))`
/// 7. `pf_employee = pf_employer = round(basic * pf_rate)`
/// 8. `professional_tax` is the configured constant
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salary;
/// use payroll_engine::config::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_salary(Decimal::from(50000), &SalaryStructure::default());
///
/// assert_eq!(breakdown.basic, Decimal::from(25000));
/// assert_eq!(breakdown.performance_bonus, Decimal::from(2083));
/// assert_eq!(breakdown.gross_earnings, Decimal::from(50000));
/// assert_eq!(breakdown.net_salary, Decimal::from(46800));
/// ```
pub fn calculate_salary(monthly_wage: Decimal, structure: &SalaryStructure) -> SalaryBreakdown {
    let basic = round_currency(monthly_wage * structure.basic_rate);
    let hra = round_currency(basic * structure.hra_rate);
    let standard_allowance = structure.standard_allowance;
    let performance_bonus = round_currency(basic * structure.bonus_rate);
    let lta = round_currency(basic * structure.lta_rate);

    let known_earnings = basic + hra + standard_allowance + performance_bonus + lta;
    let fixed_allowance = (monthly_wage - known_earnings).max(Decimal::ZERO);

    let gross_earnings = known_earnings + fixed_allowance;

    let pf_employee = round_currency(basic * structure.pf_rate);
    let pf_employer = round_currency(basic * structure.pf_rate);
    let professional_tax = structure.professional_tax;

    let total_deductions = pf_employee + professional_tax;
    let net_salary = gross_earnings - total_deductions;

    SalaryBreakdown {
        basic,
        hra,
        standard_allowance,
        performance_bonus,
        lta,
        fixed_allowance,
        gross_earnings,
        pf_employee,
        pf_employer,
        professional_tax,
        total_deductions,
        net_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn salary(wage: i64) -> SalaryBreakdown {
        calculate_salary(dec(wage), &SalaryStructure::default())
    }

    #[test]
    fn test_50000_wage_breakdown() {
        let b = salary(50000);

        assert_eq!(b.basic, dec(25000));
        assert_eq!(b.hra, dec(12500));
        assert_eq!(b.standard_allowance, dec(4167));
        // 25000 * 0.0833 = 2082.5, rounded away from zero
        assert_eq!(b.performance_bonus, dec(2083));
        assert_eq!(b.lta, dec(2083));
        assert_eq!(b.fixed_allowance, dec(4167));
        assert_eq!(b.gross_earnings, dec(50000));
        assert_eq!(b.pf_employee, dec(3000));
        assert_eq!(b.pf_employer, dec(3000));
        assert_eq!(b.professional_tax, dec(200));
        assert_eq!(b.total_deductions, dec(3200));
        assert_eq!(b.net_salary, dec(46800));
    }

    #[test]
    fn test_75000_wage_breakdown() {
        let b = salary(75000);

        assert_eq!(b.basic, dec(37500));
        assert_eq!(b.hra, dec(18750));
        // 37500 * 0.0833 = 3123.75
        assert_eq!(b.performance_bonus, dec(3124));
        assert_eq!(b.lta, dec(3124));
        // 75000 - (37500 + 18750 + 4167 + 3124 + 3124) = 8335
        assert_eq!(b.fixed_allowance, dec(8335));
        assert_eq!(b.gross_earnings, dec(75000));
        assert_eq!(b.pf_employee, dec(4500));
        assert_eq!(b.net_salary, dec(70300));
    }

    #[test]
    fn test_odd_wage_rounds_basic_half_up() {
        let b = salary(45001);

        // 45001 * 0.5 = 22500.5
        assert_eq!(b.basic, dec(22501));
        // 22501 * 0.5 = 11250.5
        assert_eq!(b.hra, dec(11251));
    }

    #[test]
    fn test_zero_wage_keeps_fixed_amounts() {
        let b = salary(0);

        assert_eq!(b.basic, Decimal::ZERO);
        assert_eq!(b.hra, Decimal::ZERO);
        assert_eq!(b.performance_bonus, Decimal::ZERO);
        assert_eq!(b.lta, Decimal::ZERO);
        assert_eq!(b.fixed_allowance, Decimal::ZERO);
        assert_eq!(b.pf_employee, Decimal::ZERO);
        assert_eq!(b.standard_allowance, dec(4167));
        assert_eq!(b.professional_tax, dec(200));
        assert_eq!(b.gross_earnings, dec(4167));
        assert_eq!(b.net_salary, dec(3967));
    }

    #[test]
    fn test_low_wage_fixed_allowance_clamped_to_zero() {
        let b = salary(8000);

        assert_eq!(b.fixed_allowance, Decimal::ZERO);
        // Earnings exceed the wage because of the fixed standard allowance.
        assert!(b.gross_earnings > dec(8000));
    }

    #[test]
    fn test_totals_are_consistent() {
        for wage in [0, 1, 999, 12345, 50000, 60000, 99999, 250000] {
            let b = salary(wage);
            assert_eq!(b.gross_earnings, b.earnings_sum(), "wage {}", wage);
            assert_eq!(b.total_deductions, b.pf_employee + b.professional_tax);
            assert_eq!(b.net_salary, b.gross_earnings - b.total_deductions);
        }
    }

    #[test]
    fn test_custom_structure_is_applied() {
        let structure = SalaryStructure {
            standard_allowance: dec(5000),
            professional_tax: dec(150),
            ..SalaryStructure::default()
        };

        let b = calculate_salary(dec(50000), &structure);
        assert_eq!(b.standard_allowance, dec(5000));
        assert_eq!(b.professional_tax, dec(150));
        assert_eq!(b.fixed_allowance, dec(3334));
        assert_eq!(b.net_salary, dec(50000 - 3000 - 150));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        assert_eq!(salary(61234), salary(61234));
    }
}
