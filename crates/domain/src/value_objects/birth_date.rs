//! Birth dates and age derivation
//!
//! A birth date can never lie in the future. Validation needs a notion of
//! "today", so each constructor comes in two forms: one reading the system
//! clock, one taking an explicit date for deterministic callers and tests.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A creature's date of birth.
///
/// `NaiveDate` is `Copy`, so the date is always handed out by value and no
/// caller can mutate a creature's internal state through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Create a birth date, validated against the system clock.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `date` is in the future.
    pub fn new(date: NaiveDate) -> Result<Self, DomainError> {
        Self::new_at(date, Utc::now().date_naive())
    }

    /// Create a birth date, validated against an explicit "today".
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `date` is after `today`.
    pub fn new_at(date: NaiveDate, today: NaiveDate) -> Result<Self, DomainError> {
        if date > today {
            return Err(DomainError::validation(format!(
                "Date of birth cannot be in the future: {date}"
            )));
        }
        Ok(Self(date))
    }

    /// The birth date itself, by value.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whole years lived as of `today`.
    ///
    /// One year is subtracted when `today`'s day-of-year precedes the birth
    /// day-of-year (birthday not yet reached this year). The result is
    /// floored at 0, so it stays well-defined even when `today` precedes
    /// the birth date (e.g. a clock moved backwards after construction).
    pub fn age_years(&self, today: NaiveDate) -> u32 {
        let mut years = today.year() - self.0.year();
        if today.ordinal() < self.0.ordinal() {
            years -= 1;
        }
        years.max(0) as u32
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_past_date_accepted() {
        let born = BirthDate::new_at(ymd(2020, 3, 10), ymd(2024, 1, 1)).unwrap();
        assert_eq!(born.date(), ymd(2020, 3, 10));
    }

    #[test]
    fn test_today_accepted() {
        assert!(BirthDate::new_at(ymd(2024, 1, 1), ymd(2024, 1, 1)).is_ok());
    }

    #[test]
    fn test_future_date_rejected() {
        // one day ahead is already too far
        let err = BirthDate::new_at(ymd(2024, 1, 2), ymd(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_system_clock_constructor_rejects_tomorrow() {
        let tomorrow = Utc::now().date_naive() + chrono::Duration::days(1);
        assert!(BirthDate::new(tomorrow).is_err());
        let yesterday = Utc::now().date_naive() - chrono::Duration::days(1);
        assert!(BirthDate::new(yesterday).is_ok());
    }

    #[test]
    fn test_age_one_year_minus_one_day_is_zero() {
        let born = BirthDate::new_at(ymd(2020, 3, 10), ymd(2020, 3, 10)).unwrap();
        assert_eq!(born.age_years(ymd(2021, 3, 9)), 0);
    }

    #[test]
    fn test_age_exactly_on_birthday() {
        let born = BirthDate::new_at(ymd(2020, 3, 10), ymd(2020, 3, 10)).unwrap();
        assert_eq!(born.age_years(ymd(2021, 3, 10)), 1);
        assert_eq!(born.age_years(ymd(2025, 3, 10)), 5);
    }

    #[test]
    fn test_age_one_year_and_one_day_is_one() {
        let born = BirthDate::new_at(ymd(2020, 3, 10), ymd(2020, 3, 10)).unwrap();
        assert_eq!(born.age_years(ymd(2021, 3, 11)), 1);
    }

    #[test]
    fn test_age_never_negative() {
        // a validated birth date queried with a clock that moved backwards
        let born = BirthDate::new_at(ymd(2020, 3, 10), ymd(2020, 3, 10)).unwrap();
        assert_eq!(born.age_years(ymd(2019, 1, 1)), 0);
    }

    #[test]
    fn test_display_is_iso() {
        let born = BirthDate::new_at(ymd(2015, 7, 4), ymd(2024, 1, 1)).unwrap();
        assert_eq!(born.to_string(), "2015-07-04");
    }
}
