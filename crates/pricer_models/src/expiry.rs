//! Per-instrument option expiry rules.
//!
//! Each instrument kind maps a delivery month to a concrete expiry date
//! through its own exchange rule. Both NYMEX rules in the closed set are
//! "three business days prior to a target date":
//!
//! - **Crude Oil (CL)**: target is the 25th calendar day of the month
//!   preceding delivery (January delivery targets December 25 of the
//!   prior year).
//! - **Natural Gas (NG)**: target is the first calendar day of the
//!   delivery month.
//!
//! The backward walk starts from the raw target date whether or not that
//! date is itself a trading day; each step lands on the previous trading
//! day per the supplied calendar.
//!
//! # Examples
//!
//! ```
//! use pricer_core::calendar::BusinessCalendar;
//! use pricer_core::types::Date;
//! use pricer_models::expiry::expiry_date;
//! use pricer_models::instruments::{DeliveryMonth, InstrumentKind};
//!
//! let calendar = BusinessCalendar::us_federal(2024..=2026);
//!
//! // March 2025 gas: target 2025-03-01 (a Saturday), back three
//! // business days to Wednesday 2025-02-26.
//! let expiry = expiry_date(
//!     InstrumentKind::NaturalGas,
//!     DeliveryMonth::new(2025, 3).unwrap(),
//!     &calendar,
//! );
//! assert_eq!(expiry, Date::from_ymd(2025, 2, 26).unwrap());
//! ```

use pricer_core::calendar::BusinessCalendar;
use pricer_core::types::Date;

use crate::instruments::{DeliveryMonth, InstrumentKind};

/// Business days between the target date and expiry, per NYMEX.
const EXPIRY_OFFSET_BUSINESS_DAYS: i64 = -3;

/// Calendar day of the preceding month targeted by the crude oil rule.
const CRUDE_OIL_TARGET_DAY: u32 = 25;

/// Computes the option expiry date for an instrument and delivery month.
///
/// Dispatch is a total match over the closed `InstrumentKind` set; adding
/// an instrument means adding a variant and an arm here.
pub fn expiry_date(
    kind: InstrumentKind,
    delivery: DeliveryMonth,
    calendar: &BusinessCalendar,
) -> Date {
    let target = target_date(kind, delivery);
    calendar.shift_business_days(target, EXPIRY_OFFSET_BUSINESS_DAYS)
}

/// The raw calendar date the backward walk starts from.
///
/// Exposed so callers can show the rule's anchor alongside the expiry.
pub fn target_date(kind: InstrumentKind, delivery: DeliveryMonth) -> Date {
    match kind {
        InstrumentKind::CrudeOil => delivery
            .preceding()
            .day(CRUDE_OIL_TARGET_DAY)
            // The 25th exists in every month.
            .expect("crude oil target day is valid in all months"),
        InstrumentKind::NaturalGas => delivery.first_day(),
    }
}
