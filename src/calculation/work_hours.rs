//! Worked and extra hours for a checked-out attendance record.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

const SECONDS_PER_HOUR: i64 = 3600;

/// Calculates the hours between check-in and check-out.
///
/// The result is rounded to two decimal places and never negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_work_hours;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let check_in = Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap();
/// let check_out = Utc.with_ymd_and_hms(2025, 1, 6, 17, 20, 0).unwrap();
///
/// assert_eq!(calculate_work_hours(check_in, check_out), Decimal::new(833, 2));
/// ```
pub fn calculate_work_hours(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Decimal {
    let elapsed = check_out - check_in;
    let millis = Decimal::from(elapsed.num_milliseconds());
    let hours = millis / Decimal::from(SECONDS_PER_HOUR * 1000);

    hours
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
}

/// Calculates the hours worked beyond a standard working day.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_extra_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_extra_hours(Decimal::new(95, 1), Decimal::from(8)), Decimal::new(15, 1));
/// assert_eq!(calculate_extra_hours(Decimal::from(6), Decimal::from(8)), Decimal::ZERO);
/// ```
pub fn calculate_extra_hours(work_hours: Decimal, standard_hours: Decimal) -> Decimal {
    (work_hours - standard_hours).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 6, hour, minute, second).unwrap()
    }

    #[test]
    fn test_full_day() {
        assert_eq!(calculate_work_hours(at(9, 0, 0), at(17, 0, 0)), Decimal::from(8));
    }

    #[test]
    fn test_rounds_to_two_places() {
        // 1 hour 1 minute = 1.01666...
        assert_eq!(calculate_work_hours(at(9, 0, 0), at(10, 1, 0)), Decimal::new(102, 2));
    }

    #[test]
    fn test_check_out_before_check_in_is_zero() {
        assert_eq!(calculate_work_hours(at(17, 0, 0), at(9, 0, 0)), Decimal::ZERO);
    }

    #[test]
    fn test_extra_hours_beyond_standard_day() {
        let worked = calculate_work_hours(at(8, 0, 0), at(19, 15, 0));
        assert_eq!(worked, Decimal::new(1125, 2));
        assert_eq!(calculate_extra_hours(worked, Decimal::from(8)), Decimal::new(325, 2));
    }

    #[test]
    fn test_exact_standard_day_has_no_extra_hours() {
        assert_eq!(calculate_extra_hours(Decimal::from(8), Decimal::from(8)), Decimal::ZERO);
    }
}
