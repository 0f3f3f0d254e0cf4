//! US federal holiday generation.
//!
//! Reproduces the standard US federal holiday set with nearest-workday
//! observance: fixed-date holidays falling on a Saturday are observed the
//! preceding Friday, those falling on a Sunday the following Monday.
//! Floating holidays (nth or last weekday of a month) always land on
//! weekdays and need no adjustment.

use chrono::Weekday;
use std::ops::RangeInclusive;

use crate::types::time::Date;

/// Generates the US federal holidays (observed dates) for each year in
/// `years`.
///
/// The set per year:
/// - New Year's Day (January 1)
/// - Birthday of Martin Luther King, Jr. (third Monday of January)
/// - Washington's Birthday (third Monday of February)
/// - Memorial Day (last Monday of May)
/// - Juneteenth National Independence Day (June 19)
/// - Independence Day (July 4)
/// - Labor Day (first Monday of September)
/// - Columbus Day (second Monday of October)
/// - Veterans Day (November 11)
/// - Thanksgiving Day (fourth Thursday of November)
/// - Christmas Day (December 25)
///
/// # Examples
///
/// ```
/// use pricer_core::calendar::us_federal_holidays;
/// use pricer_core::types::time::Date;
///
/// let holidays = us_federal_holidays(2025..=2025);
///
/// // Christmas 2025 falls on a Thursday: observed as-is.
/// assert!(holidays.contains(&Date::from_ymd(2025, 12, 25).unwrap()));
///
/// // Independence Day 2026 is a Saturday: observed Friday July 3.
/// let holidays = us_federal_holidays(2026..=2026);
/// assert!(holidays.contains(&Date::from_ymd(2026, 7, 3).unwrap()));
/// ```
pub fn us_federal_holidays(years: RangeInclusive<i32>) -> Vec<Date> {
    let mut holidays = Vec::new();

    for year in years {
        holidays.push(nearest_workday(fixed(year, 1, 1)));
        holidays.push(nth_weekday(year, 1, Weekday::Mon, 3));
        holidays.push(nth_weekday(year, 2, Weekday::Mon, 3));
        holidays.push(last_weekday(year, 5, Weekday::Mon));
        holidays.push(nearest_workday(fixed(year, 6, 19)));
        holidays.push(nearest_workday(fixed(year, 7, 4)));
        holidays.push(nth_weekday(year, 9, Weekday::Mon, 1));
        holidays.push(nth_weekday(year, 10, Weekday::Mon, 2));
        holidays.push(nearest_workday(fixed(year, 11, 11)));
        holidays.push(nth_weekday(year, 11, Weekday::Thu, 4));
        holidays.push(nearest_workday(fixed(year, 12, 25)));
    }

    holidays
}

/// A fixed-date holiday for a year known to have that date.
fn fixed(year: i32, month: u32, day: u32) -> Date {
    // The fixed federal dates (Jan 1, Jun 19, Jul 4, Nov 11, Dec 25) exist
    // in every year.
    Date::from_ymd(year, month, day).expect("fixed federal holiday date is always valid")
}

/// Shifts a holiday to the nearest workday: Saturday to the preceding
/// Friday, Sunday to the following Monday.
fn nearest_workday(date: Date) -> Date {
    match date.weekday() {
        Weekday::Sat => date.add_days(-1),
        Weekday::Sun => date.add_days(1),
        _ => date,
    }
}

/// The nth occurrence (1-based) of `weekday` in the given month.
fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u32) -> Date {
    let first = fixed(year, month, 1);
    let offset = (7 + weekday.num_days_from_monday() as i64
        - first.weekday().num_days_from_monday() as i64)
        % 7;
    first.add_days(offset + 7 * (n as i64 - 1))
}

/// The last occurrence of `weekday` in the given month.
fn last_weekday(year: i32, month: u32, weekday: Weekday) -> Date {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = fixed(next_year, next_month, 1).add_days(-1);
    let offset = (7 + last.weekday().num_days_from_monday() as i64
        - weekday.num_days_from_monday() as i64)
        % 7;
    last.add_days(-offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_floating_holidays_2025() {
        let holidays = us_federal_holidays(2025..=2025);
        // MLK Day: third Monday of January 2025.
        assert!(holidays.contains(&ymd(2025, 1, 20)));
        // Washington's Birthday: third Monday of February 2025.
        assert!(holidays.contains(&ymd(2025, 2, 17)));
        // Memorial Day: last Monday of May 2025.
        assert!(holidays.contains(&ymd(2025, 5, 26)));
        // Labor Day: first Monday of September 2025.
        assert!(holidays.contains(&ymd(2025, 9, 1)));
        // Columbus Day: second Monday of October 2025.
        assert!(holidays.contains(&ymd(2025, 10, 13)));
        // Thanksgiving: fourth Thursday of November 2025.
        assert!(holidays.contains(&ymd(2025, 11, 27)));
    }

    #[test]
    fn test_fixed_holidays_on_weekday_unadjusted() {
        let holidays = us_federal_holidays(2024..=2024);
        // 2024-07-04 is a Thursday.
        assert!(holidays.contains(&ymd(2024, 7, 4)));
        // 2024-12-25 is a Wednesday.
        assert!(holidays.contains(&ymd(2024, 12, 25)));
    }

    #[test]
    fn test_saturday_holiday_observed_friday() {
        // Independence Day 2026 is a Saturday; observed 2026-07-03.
        let holidays = us_federal_holidays(2026..=2026);
        assert!(holidays.contains(&ymd(2026, 7, 3)));
        assert!(!holidays.contains(&ymd(2026, 7, 4)));
    }

    #[test]
    fn test_sunday_holiday_observed_monday() {
        // Juneteenth 2022 is a Sunday; observed 2022-06-20.
        let holidays = us_federal_holidays(2022..=2022);
        assert!(holidays.contains(&ymd(2022, 6, 20)));
    }

    #[test]
    fn test_eleven_holidays_per_year() {
        assert_eq!(us_federal_holidays(2025..=2025).len(), 11);
        assert_eq!(us_federal_holidays(2024..=2026).len(), 33);
    }

    #[test]
    fn test_all_observed_dates_are_weekdays() {
        for holiday in us_federal_holidays(2000..=2050) {
            assert!(
                !matches!(holiday.weekday(), Weekday::Sat | Weekday::Sun),
                "observed holiday {} falls on a weekend",
                holiday
            );
        }
    }

    #[test]
    fn test_last_weekday_december() {
        // Year-end boundary in last_weekday: last Monday of December 2025.
        assert_eq!(last_weekday(2025, 12, Weekday::Mon), ymd(2025, 12, 29));
    }
}
