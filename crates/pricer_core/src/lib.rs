//! # pricer_core: Date and Calendar Foundation
//!
//! ## Layer Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Time types: `Date`, fixed-365 day count helpers (`types::time`)
//! - Business-day calendars with injectable holiday sets (`calendar`)
//! - Error types: `DateError` (`types::error`)
//!
//! Everything here is a pure, synchronous, in-memory computation: no
//! clocks (valuation dates are explicit inputs), no I/O, no shared
//! mutable state.
//!
//! ## Usage
//!
//! ```rust
//! use pricer_core::calendar::BusinessCalendar;
//! use pricer_core::types::{time_to_expiration, Date};
//!
//! let calendar = BusinessCalendar::us_federal(2024..=2026);
//! let target = Date::from_ymd(2025, 3, 1).unwrap();
//! let expiry = calendar.shift_business_days(target, -3);
//!
//! let now = Date::from_ymd(2025, 1, 15).unwrap();
//! let year_fraction = time_to_expiration(expiry, now).unwrap();
//! assert!(year_fraction > 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): ISO 8601 serialisation for `Date`

pub mod calendar;
pub mod types;

pub use calendar::{us_federal_holidays, BusinessCalendar};
pub use types::{time_to_expiration, year_fraction_365, Date, DateError, DAYS_PER_YEAR};
