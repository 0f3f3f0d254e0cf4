//! Delivery month type.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::{Date, DateError};

/// A futures contract delivery month: a year and a month, no day.
///
/// The day-of-month component of a delivery period is not meaningful;
/// any date-shaped input is normalised by dropping the day. Ordering is
/// chronological.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::DeliveryMonth;
/// use pricer_core::types::Date;
///
/// let month = DeliveryMonth::new(2025, 3).unwrap();
/// assert_eq!(month.first_day(), Date::from_ymd(2025, 3, 1).unwrap());
/// assert_eq!(format!("{}", month), "2025-03");
///
/// // Day components are normalised away.
/// let from_date = DeliveryMonth::from_date(Date::from_ymd(2025, 3, 17).unwrap());
/// assert_eq!(from_date, month);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeliveryMonth {
    year: i32,
    month: u32,
}

impl DeliveryMonth {
    /// Creates a delivery month from a year and a 1-based month.
    ///
    /// # Errors
    /// `DateError::InvalidMonth` when `month` is outside 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// Creates a delivery month from a date, dropping the day component.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first calendar day of the month.
    pub fn first_day(&self) -> Date {
        // Month is validated at construction, so the 1st always exists.
        Date::from_ymd(self.year, self.month, 1).expect("validated month has a first day")
    }

    /// Returns the given calendar day within the month.
    ///
    /// # Errors
    /// `DateError::InvalidDate` when the month has no such day.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::instruments::DeliveryMonth;
    ///
    /// let feb = DeliveryMonth::new(2025, 2).unwrap();
    /// assert!(feb.day(25).is_ok());
    /// assert!(feb.day(30).is_err());
    /// ```
    pub fn day(&self, day: u32) -> Result<Date, DateError> {
        Date::from_ymd(self.year, self.month, day)
    }

    /// Returns the preceding month, rolling January back to December of
    /// the prior year explicitly.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::instruments::DeliveryMonth;
    ///
    /// let january = DeliveryMonth::new(2025, 1).unwrap();
    /// let december = january.preceding();
    /// assert_eq!(december.year(), 2024);
    /// assert_eq!(december.month(), 12);
    /// ```
    pub fn preceding(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns the month `months` whole months after this one.
    pub fn add_months(&self, months: u32) -> Self {
        let total = self.year as i64 * 12 + (self.month as i64 - 1) + months as i64;
        Self {
            year: (total.div_euclid(12)) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }
}

impl fmt::Display for DeliveryMonth {
    /// Formats as "YYYY-MM".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for DeliveryMonth {
    type Err = DateError;

    /// Parses "YYYY-MM"; a full "YYYY-MM-DD" date is accepted and
    /// normalised by dropping the day.
    fn from_str(s: &str) -> Result<Self, DateError> {
        if let Ok(date) = Date::parse(s) {
            return Ok(DeliveryMonth::from_date(date));
        }

        let (year_part, month_part) = s
            .split_once('-')
            .ok_or_else(|| DateError::ParseError(format!("expected YYYY-MM, got {:?}", s)))?;
        let year: i32 = year_part
            .parse()
            .map_err(|_| DateError::ParseError(format!("invalid year in {:?}", s)))?;
        let month: u32 = month_part
            .parse()
            .map_err(|_| DateError::ParseError(format!("invalid month in {:?}", s)))?;
        DeliveryMonth::new(year, month)
    }
}

impl From<Date> for DeliveryMonth {
    fn from(date: Date) -> Self {
        DeliveryMonth::from_date(date)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DeliveryMonth;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DeliveryMonth {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for DeliveryMonth {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DeliveryMonth::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_month() {
        assert!(DeliveryMonth::new(2025, 1).is_ok());
        assert!(DeliveryMonth::new(2025, 12).is_ok());
        assert_eq!(
            DeliveryMonth::new(2025, 0).unwrap_err(),
            DateError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            DeliveryMonth::new(2025, 13).unwrap_err(),
            DateError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn test_from_date_normalises_day() {
        let date = Date::from_ymd(2025, 6, 28).unwrap();
        let month = DeliveryMonth::from_date(date);
        assert_eq!(month, DeliveryMonth::new(2025, 6).unwrap());
        assert_eq!(month.first_day().day(), 1);
    }

    #[test]
    fn test_preceding_mid_year() {
        let march = DeliveryMonth::new(2025, 3).unwrap();
        assert_eq!(march.preceding(), DeliveryMonth::new(2025, 2).unwrap());
    }

    #[test]
    fn test_preceding_january_rolls_year() {
        let january = DeliveryMonth::new(2025, 1).unwrap();
        let december = january.preceding();
        assert_eq!(december, DeliveryMonth::new(2024, 12).unwrap());
    }

    #[test]
    fn test_day_within_month() {
        let feb = DeliveryMonth::new(2025, 2).unwrap();
        assert_eq!(feb.day(25).unwrap(), Date::from_ymd(2025, 2, 25).unwrap());
        assert!(feb.day(30).is_err());
    }

    #[test]
    fn test_add_months_across_year_end() {
        let november = DeliveryMonth::new(2024, 11).unwrap();
        assert_eq!(november.add_months(2), DeliveryMonth::new(2025, 1).unwrap());
        assert_eq!(november.add_months(0), november);
        assert_eq!(november.add_months(14), DeliveryMonth::new(2026, 1).unwrap());
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let month = DeliveryMonth::new(2025, 3).unwrap();
        assert_eq!(format!("{}", month), "2025-03");
        assert_eq!("2025-03".parse::<DeliveryMonth>().unwrap(), month);
    }

    #[test]
    fn test_parse_full_date_normalised() {
        let parsed: DeliveryMonth = "2025-03-15".parse().unwrap();
        assert_eq!(parsed, DeliveryMonth::new(2025, 3).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("march".parse::<DeliveryMonth>().is_err());
        assert!("2025".parse::<DeliveryMonth>().is_err());
        assert!("2025-00".parse::<DeliveryMonth>().is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let early = DeliveryMonth::new(2024, 12).unwrap();
        let late = DeliveryMonth::new(2025, 1).unwrap();
        assert!(early < late);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let month = DeliveryMonth::new(2025, 3).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2025-03\"");
        let parsed: DeliveryMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, month);
    }
}
