//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CompanyProfile, PayrollConfig, PayrunSettings, SalaryStructure};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and exposes the salary structure and payrun settings used by the
/// calculation functions.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── company.yaml           # Company profile
/// ├── salary_structure.yaml  # Component rates and fixed amounts
/// └── payrun.yaml            # Working days and standard hours
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Standard allowance: {}", loader.salary_structure().standard_allowance);
/// println!("Working days: {}", loader.payrun_settings().total_working_days);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - `total_working_days` is zero
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyProfile>(&path.join("company.yaml"))?;
        let salary = Self::load_yaml::<SalaryStructure>(&path.join("salary_structure.yaml"))?;

        let payrun_path = path.join("payrun.yaml");
        let payrun = Self::load_yaml::<PayrunSettings>(&payrun_path)?;
        if payrun.total_working_days == 0 {
            return Err(EngineError::ConfigParseError {
                path: payrun_path.display().to_string(),
                message: "total_working_days must be greater than zero".to_string(),
            });
        }

        debug!(
            company = %company.company_name,
            standard_allowance = %salary.standard_allowance,
            total_working_days = payrun.total_working_days,
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(company, salary, payrun),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the company profile.
    pub fn company(&self) -> &CompanyProfile {
        self.config.company()
    }

    /// Returns the salary structure.
    pub fn salary_structure(&self) -> &SalaryStructure {
        self.config.salary()
    }

    /// Returns the payrun settings.
    pub fn payrun_settings(&self) -> &PayrunSettings {
        self.config.payrun()
    }
}
