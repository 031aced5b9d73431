//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default fixed standard allowance, in rupees per month.
pub const DEFAULT_STANDARD_ALLOWANCE: Decimal = Decimal::from_parts(4167, 0, 0, false, 0);

/// Default fixed professional tax, in rupees per month.
pub const DEFAULT_PROFESSIONAL_TAX: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Default number of working days a month is prorated over.
pub const DEFAULT_TOTAL_WORKING_DAYS: u32 = 30;

/// Default length of a working day, in hours.
pub const DEFAULT_STANDARD_WORK_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Identifying information about the company running payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// The company's display name.
    pub company_name: String,
    /// Short code used as a prefix for login identifiers.
    pub company_short_code: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            company_name: "WorkZen".to_string(),
            company_short_code: "OI".to_string(),
        }
    }
}

/// The salary structure used to split a monthly wage into components.
///
/// Rates are exact decimal fractions (e.g. `0.0833` for 8.33%); fixed amounts
/// are whole rupees.
///
/// # Example
///
/// ```
/// use payroll_engine::config::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let structure = SalaryStructure::default();
/// assert_eq!(structure.standard_allowance, Decimal::from(4167));
/// assert_eq!(structure.professional_tax, Decimal::from(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// Fixed standard allowance paid every month.
    pub standard_allowance: Decimal,
    /// Fixed professional tax deducted every month.
    pub professional_tax: Decimal,
    /// Share of the wage paid as basic salary.
    pub basic_rate: Decimal,
    /// House rent allowance as a share of basic.
    pub hra_rate: Decimal,
    /// Performance bonus as a share of basic.
    pub bonus_rate: Decimal,
    /// Leave travel allowance as a share of basic.
    pub lta_rate: Decimal,
    /// Provident fund contribution as a share of basic (employee and employer each).
    pub pf_rate: Decimal,
}

impl Default for SalaryStructure {
    fn default() -> Self {
        Self {
            standard_allowance: DEFAULT_STANDARD_ALLOWANCE,
            professional_tax: DEFAULT_PROFESSIONAL_TAX,
            basic_rate: Decimal::new(5, 1),
            hra_rate: Decimal::new(5, 1),
            bonus_rate: Decimal::new(833, 4),
            lta_rate: Decimal::new(833, 4),
            pf_rate: Decimal::new(12, 2),
        }
    }
}

/// Settings that govern a payrun batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrunSettings {
    /// Working days a month is prorated over, regardless of calendar length.
    #[serde(default = "default_total_working_days")]
    pub total_working_days: u32,
    /// Hours in a standard working day; anything beyond counts as extra hours.
    #[serde(default = "default_standard_work_hours")]
    pub standard_work_hours: Decimal,
}

fn default_total_working_days() -> u32 {
    DEFAULT_TOTAL_WORKING_DAYS
}

fn default_standard_work_hours() -> Decimal {
    DEFAULT_STANDARD_WORK_HOURS
}

impl Default for PayrunSettings {
    fn default() -> Self {
        Self {
            total_working_days: DEFAULT_TOTAL_WORKING_DAYS,
            standard_work_hours: DEFAULT_STANDARD_WORK_HOURS,
        }
    }
}

/// The complete payroll configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a configuration directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollConfig {
    company: CompanyProfile,
    salary: SalaryStructure,
    payrun: PayrunSettings,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(company: CompanyProfile, salary: SalaryStructure, payrun: PayrunSettings) -> Self {
        Self {
            company,
            salary,
            payrun,
        }
    }

    /// Returns the company profile.
    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Returns the salary structure.
    pub fn salary(&self) -> &SalaryStructure {
        &self.salary
    }

    /// Returns the payrun settings.
    pub fn payrun(&self) -> &PayrunSettings {
        &self.payrun
    }
}
