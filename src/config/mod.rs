//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load payroll configuration from YAML files,
//! including the company profile, the salary structure and payrun settings.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded company: {}", loader.company().company_name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompanyProfile, DEFAULT_PROFESSIONAL_TAX, DEFAULT_STANDARD_ALLOWANCE,
    DEFAULT_STANDARD_WORK_HOURS, DEFAULT_TOTAL_WORKING_DAYS, PayrollConfig, PayrunSettings,
    SalaryStructure,
};
