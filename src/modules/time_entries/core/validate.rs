// Business rules a time entry must satisfy before it is persisted.
//
// Callers evaluate them in a fixed order and stop at the first violation:
// increment, range, future date, daily cap. All arithmetic is decimal.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

use crate::modules::time_entries::core::time_entry::{RecordTimeEntry, TimeEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursViolation {
    Increment,
    Range,
}

impl fmt::Display for HoursViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoursViolation::Increment => f.write_str("hours must be in 0.25 increments"),
            HoursViolation::Range => f.write_str("hours must be between 0.25 and 24"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateViolation {
    Future,
}

impl fmt::Display for DateViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateViolation::Future => f.write_str("date cannot be in the future"),
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{reason}")]
    InvalidHours { reason: HoursViolation },

    #[error("{reason}")]
    InvalidDate { reason: DateViolation },

    #[error("total hours per employee per day cannot exceed 24")]
    DailyCapExceeded,
}

pub fn quarter_hour() -> Decimal {
    Decimal::new(25, 2)
}

pub fn max_daily_hours() -> Decimal {
    Decimal::from(24)
}

pub fn check_hours(hours: Decimal) -> Result<(), ValidationError> {
    if !(hours % quarter_hour()).is_zero() {
        return Err(ValidationError::InvalidHours {
            reason: HoursViolation::Increment,
        });
    }
    if hours < quarter_hour() || hours > max_daily_hours() {
        return Err(ValidationError::InvalidHours {
            reason: HoursViolation::Range,
        });
    }
    Ok(())
}

pub fn check_date(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date > today {
        return Err(ValidationError::InvalidDate {
            reason: DateViolation::Future,
        });
    }
    Ok(())
}

/// `recorded` is the current aggregate for the candidate's (employee, date).
///
/// The replaced entry only offsets that aggregate when it sits on the same pair;
/// moving an entry to another employee or day leaves the old pair untouched.
pub fn check_daily_cap(
    candidate: &RecordTimeEntry,
    replaced: Option<&TimeEntry>,
    recorded: Decimal,
) -> Result<(), ValidationError> {
    let mut existing = recorded;
    if let Some(replaced) = replaced {
        if replaced.daily_key() == candidate.daily_key() {
            existing -= replaced.hours;
        }
    }
    if existing + candidate.hours > max_daily_hours() {
        return Err(ValidationError::DailyCapExceeded);
    }
    Ok(())
}

#[cfg(test)]
mod validate_tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[fixture]
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    #[fixture]
    fn candidate() -> RecordTimeEntry {
        RecordTimeEntry {
            employee_id: 1,
            project_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            hours: dec("4.00"),
            description: None,
        }
    }

    fn stored(candidate: &RecordTimeEntry, hours: &str) -> TimeEntry {
        TimeEntry {
            id: 1,
            employee_id: candidate.employee_id,
            project_id: candidate.project_id,
            date: candidate.date,
            hours: dec(hours),
            description: None,
        }
    }

    #[rstest]
    #[case("0.25")]
    #[case("2.75")]
    #[case("8")]
    #[case("24.00")]
    fn it_should_accept_quarter_hours_within_range(#[case] hours: &str) {
        assert_eq!(check_hours(dec(hours)), Ok(()));
    }

    #[rstest]
    #[case("1.30")]
    #[case("0.10")]
    #[case("7.01")]
    fn it_should_reject_hours_off_the_quarter_grid(#[case] hours: &str) {
        assert_eq!(
            check_hours(dec(hours)),
            Err(ValidationError::InvalidHours {
                reason: HoursViolation::Increment
            })
        );
    }

    #[rstest]
    #[case("0")]
    #[case("-1.00")]
    #[case("24.25")]
    #[case("48")]
    fn it_should_reject_hours_outside_the_range(#[case] hours: &str) {
        assert_eq!(
            check_hours(dec(hours)),
            Err(ValidationError::InvalidHours {
                reason: HoursViolation::Range
            })
        );
    }

    #[rstest]
    fn it_should_accept_today_and_reject_tomorrow(today: NaiveDate) {
        assert_eq!(check_date(today, today), Ok(()));
        assert_eq!(check_date(today.pred_opt().unwrap(), today), Ok(()));
        assert_eq!(
            check_date(today.succ_opt().unwrap(), today),
            Err(ValidationError::InvalidDate {
                reason: DateViolation::Future
            })
        );
    }

    #[rstest]
    fn it_should_allow_filling_the_day_to_exactly_24(candidate: RecordTimeEntry) {
        let command = RecordTimeEntry {
            hours: dec("16.00"),
            ..candidate
        };
        assert_eq!(check_daily_cap(&command, None, dec("8.00")), Ok(()));
    }

    #[rstest]
    fn it_should_reject_going_over_24(candidate: RecordTimeEntry) {
        let command = RecordTimeEntry {
            hours: dec("16.25"),
            ..candidate
        };
        assert_eq!(
            check_daily_cap(&command, None, dec("8.00")),
            Err(ValidationError::DailyCapExceeded)
        );
    }

    #[rstest]
    fn it_should_not_count_the_replaced_entry_against_itself(candidate: RecordTimeEntry) {
        let replaced = stored(&candidate, "20.00");
        let command = RecordTimeEntry {
            hours: dec("20.00"),
            ..candidate
        };
        assert_eq!(
            check_daily_cap(&command, Some(&replaced), dec("20.00")),
            Ok(())
        );
    }

    #[rstest]
    fn it_should_not_offset_when_the_replaced_entry_is_on_another_day(
        candidate: RecordTimeEntry,
    ) {
        let mut replaced = stored(&candidate, "10.00");
        replaced.date = candidate.date.pred_opt().unwrap();
        let command = RecordTimeEntry {
            hours: dec("10.00"),
            ..candidate
        };
        assert_eq!(
            check_daily_cap(&command, Some(&replaced), dec("16.00")),
            Err(ValidationError::DailyCapExceeded)
        );
    }

    #[rstest]
    fn it_should_not_offset_when_the_replaced_entry_belongs_to_another_employee(
        candidate: RecordTimeEntry,
    ) {
        let mut replaced = stored(&candidate, "10.00");
        replaced.employee_id = 2;
        let command = RecordTimeEntry {
            hours: dec("10.00"),
            ..candidate
        };
        assert_eq!(
            check_daily_cap(&command, Some(&replaced), dec("16.00")),
            Err(ValidationError::DailyCapExceeded)
        );
    }

    #[rstest]
    #[case(ValidationError::InvalidHours { reason: HoursViolation::Increment }, "hours must be in 0.25 increments")]
    #[case(ValidationError::InvalidHours { reason: HoursViolation::Range }, "hours must be between 0.25 and 24")]
    #[case(ValidationError::InvalidDate { reason: DateViolation::Future }, "date cannot be in the future")]
    #[case(ValidationError::DailyCapExceeded, "total hours per employee per day cannot exceed 24")]
    fn it_should_describe_each_violation(#[case] error: ValidationError, #[case] message: &str) {
        assert_eq!(error.to_string(), message);
    }
}
