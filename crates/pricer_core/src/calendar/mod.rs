//! Business-day calendar with injectable holiday sets.
//!
//! This module provides:
//! - `BusinessCalendar`: answers "is this a trading day?" and shifts dates
//!   by whole business days
//! - `us_federal_holidays`: the standard US federal holiday set
//!
//! Weekends (Saturday, Sunday) are always non-trading; holidays are
//! supplied by the caller so exchange calendars are not hard-coded into
//! the pricer.
//!
//! # Examples
//!
//! ```
//! use pricer_core::calendar::BusinessCalendar;
//! use pricer_core::types::time::Date;
//!
//! let calendar = BusinessCalendar::us_federal(2024..=2026);
//!
//! // 2025-03-01 is a Saturday.
//! let saturday = Date::from_ymd(2025, 3, 1).unwrap();
//! assert!(!calendar.is_trading_day(saturday));
//!
//! // Three business days before: Friday, Thursday, Wednesday.
//! let shifted = calendar.shift_business_days(saturday, -3);
//! assert_eq!(shifted, Date::from_ymd(2025, 2, 26).unwrap());
//! ```

mod us_federal;

pub use us_federal::us_federal_holidays;

use chrono::Weekday;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::types::time::Date;

/// Calendar of trading days: weekdays excluding a fixed holiday set.
///
/// Pure value type; all queries are functions of (date, holiday set) with
/// no side effects, so a calendar can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    holidays: BTreeSet<Date>,
}

impl BusinessCalendar {
    /// Creates a calendar from an explicit holiday set.
    ///
    /// Weekend dates in the set are accepted but redundant: Saturdays and
    /// Sundays are non-trading regardless.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::calendar::BusinessCalendar;
    /// use pricer_core::types::time::Date;
    ///
    /// let christmas = Date::from_ymd(2024, 12, 25).unwrap();
    /// let calendar = BusinessCalendar::new([christmas]);
    /// assert!(!calendar.is_trading_day(christmas));
    /// ```
    pub fn new(holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Creates a calendar with no holidays: every weekday trades.
    pub fn weekends_only() -> Self {
        Self {
            holidays: BTreeSet::new(),
        }
    }

    /// Creates a calendar loaded with the US federal holidays for the
    /// given span of years.
    ///
    /// Shifts near the edge of the span can walk past the loaded years;
    /// size the span to cover every date the caller will touch.
    pub fn us_federal(years: RangeInclusive<i32>) -> Self {
        Self::new(us_federal_holidays(years))
    }

    /// Returns true when `date` is a weekday and not a holiday.
    pub fn is_trading_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }

    /// Returns true when `date` is in the holiday set.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Number of holidays loaded into the calendar.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Shifts a date by `n` business days, walking one calendar day at a
    /// time and counting only trading days.
    ///
    /// Negative `n` walks backward, positive `n` forward. The walk starts
    /// from `date` itself regardless of whether `date` is a trading day;
    /// with non-zero `n` the result is always a trading day. `n = 0`
    /// returns `date` unchanged, which callers must not rely on landing
    /// on a trading day.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::calendar::BusinessCalendar;
    /// use pricer_core::types::time::Date;
    ///
    /// let calendar = BusinessCalendar::weekends_only();
    ///
    /// // 2025-01-06 is a Monday; one business day back is Friday.
    /// let monday = Date::from_ymd(2025, 1, 6).unwrap();
    /// let friday = Date::from_ymd(2025, 1, 3).unwrap();
    /// assert_eq!(calendar.shift_business_days(monday, -1), friday);
    /// assert_eq!(calendar.shift_business_days(friday, 1), monday);
    /// ```
    pub fn shift_business_days(&self, date: Date, n: i64) -> Date {
        let step = if n < 0 { -1 } else { 1 };
        let mut remaining = n.abs();
        let mut current = date;

        while remaining > 0 {
            current = current.add_days(step);
            if self.is_trading_day(current) {
                remaining -= 1;
            }
        }

        current
    }

    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
