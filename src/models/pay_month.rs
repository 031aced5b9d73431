//! Pay month model.
//!
//! This module contains the [`PayMonth`] type that identifies the calendar
//! month a payrun is calculated for.

use chrono::{Month, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// A calendar month in a given year, with its first and last day resolved.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayMonth;
/// use chrono::NaiveDate;
///
/// let month = PayMonth::parse("February", 2024).unwrap();
/// assert!(month.contains_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
/// assert!(month.contains_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
/// assert!(!month.contains_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// assert_eq!(month.name(), "February");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayMonth {
    month: Month,
    year: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl PayMonth {
    /// Creates a pay month, resolving its first and last calendar day.
    pub fn new(month: Month, year: i32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonth {
            month: format!("{} {}", month.name(), year),
        };

        let start_date =
            NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).ok_or_else(invalid)?;
        let next_start = match month {
            Month::December => NaiveDate::from_ymd_opt(year + 1, 1, 1),
            _ => NaiveDate::from_ymd_opt(year, month.succ().number_from_month(), 1),
        }
        .ok_or_else(invalid)?;
        let end_date = next_start.pred_opt().ok_or_else(invalid)?;

        Ok(Self {
            month,
            year,
            start_date,
            end_date,
        })
    }

    /// Parses an English month name ("January", case-insensitive, or its
    /// three-letter abbreviation).
    pub fn parse(name: &str, year: i32) -> EngineResult<Self> {
        let month = name
            .trim()
            .parse::<Month>()
            .map_err(|_| EngineError::InvalidMonth {
                month: name.to_string(),
            })?;
        Self::new(month, year)
    }

    /// Returns the full English month name, as stored on payslips.
    pub fn name(&self) -> &'static str {
        self.month.name()
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns true if `date` falls within the month (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
