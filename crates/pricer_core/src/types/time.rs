//! Time types and the fixed-365 day count used for option expiry.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `year_fraction_365`: ACT/365 Fixed year fraction between two dates
//! - `time_to_expiration`: Validated year fraction from a valuation date
//!   to an expiry date
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, time_to_expiration};
//!
//! let now = Date::from_ymd(2025, 1, 2).unwrap();
//! let expiry = Date::from_ymd(2025, 4, 2).unwrap();
//!
//! let yf = time_to_expiration(expiry, now).unwrap();
//! assert!((yf - 90.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, Local, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Days per year under the fixed-365 day count convention.
///
/// The expiry pipeline deliberately ignores leap days: a year fraction is
/// always `calendar_days / 365.0`.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing/formatting and day arithmetic. All dates in
/// the pricing pipeline flow through this wrapper.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// assert_eq!(date.year(), 2025);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2025-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2025)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(date.day(), 29);
    ///
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    ///
    /// The core pipeline never calls this itself; valuation dates are
    /// explicit inputs. The service layer uses it to default `--date`.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the date `days` calendar days after this one (negative
    /// values walk backward).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2025, 3, 1).unwrap();
    /// assert_eq!(date.add_days(-1), Date::from_ymd(2025, 2, 28).unwrap());
    /// ```
    pub fn add_days(self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }
}

impl From<NaiveDate> for Date {
    fn from(inner: NaiveDate) -> Self {
        Date(inner)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// ACT/365 Fixed year fraction between two dates.
///
/// Signed: negative when `start > end`. Not leap-adjusted and not a
/// trading-day count; the divisor is always 365.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{year_fraction_365, Date};
///
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 7, 1).unwrap();
/// let yf = year_fraction_365(start, end);
/// assert!((yf - 181.0 / 365.0).abs() < 1e-12);
/// ```
pub fn year_fraction_365(start: Date, end: Date) -> f64 {
    (end - start) as f64 / DAYS_PER_YEAR
}

/// Converts an expiry date into a validated time to expiration in years.
///
/// Computed as `(expiry - now).days / 365.0`. The valuation date is an
/// explicit argument so the conversion is deterministic and testable
/// without clock mocking.
///
/// # Errors
/// `DateError::ExpiredOrInvalid` when the year fraction is zero or
/// negative. This is a hard precondition of the pricer, not a warning:
/// callers must surface the failure instead of pricing a negative-time
/// option.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{time_to_expiration, Date};
///
/// let now = Date::from_ymd(2025, 3, 10).unwrap();
///
/// // One day out: 1/365 of a year.
/// let yf = time_to_expiration(now.add_days(1), now).unwrap();
/// assert!((yf - 1.0 / 365.0).abs() < 1e-12);
///
/// // Expiry equal to the valuation date is rejected.
/// assert!(time_to_expiration(now, now).is_err());
/// ```
pub fn time_to_expiration(expiry: Date, now: Date) -> Result<f64, DateError> {
    let days = expiry - now;
    if days <= 0 {
        return Err(DateError::ExpiredOrInvalid { days });
    }
    Ok(days as f64 / DAYS_PER_YEAR)
}
