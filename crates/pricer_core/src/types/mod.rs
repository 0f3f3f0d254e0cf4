//! Core types: dates, day counts, and their errors.

pub mod error;
pub mod time;

pub use error::DateError;
pub use time::{time_to_expiration, year_fraction_365, Date, DAYS_PER_YEAR};
