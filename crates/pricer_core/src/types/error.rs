//! Error types for date construction and time-to-expiration checks.

use thiserror::Error;

/// Errors from date construction, parsing, and expiry checks.
///
/// # Variants
/// - `InvalidDate`: Date components do not form a valid calendar date
/// - `InvalidMonth`: Month component outside 1-12
/// - `ParseError`: String could not be parsed as a date
/// - `ExpiredOrInvalid`: Time to expiration is not positive
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-02-30");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateError {
    /// Date components do not form a valid calendar date.
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Month component outside the 1-12 range.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u32,
    },

    /// String could not be parsed as a date.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Expiry is not strictly after the valuation date.
    ///
    /// Raised by the time-to-expiration converter when the year fraction
    /// comes out zero or negative. Terminal for the pricing request.
    #[error("Expired or invalid: {days} day(s) from valuation date to expiry (must be positive)")]
    ExpiredOrInvalid {
        /// Signed day count from valuation date to expiry.
        days: i64,
    },
}

impl DateError {
    /// Returns a short machine-readable kind name.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::DateError;
    ///
    /// let err = DateError::ExpiredOrInvalid { days: 0 };
    /// assert_eq!(err.kind(), "ExpiredOrInvalid");
    /// ```
    pub fn kind(&self) -> &'static str {
        match self {
            DateError::InvalidDate { .. } => "InvalidDate",
            DateError::InvalidMonth { .. } => "InvalidMonth",
            DateError::ParseError(_) => "ParseError",
            DateError::ExpiredOrInvalid { .. } => "ExpiredOrInvalid",
        }
    }
}
