//! European option specification on an energy future.

use std::fmt;

use super::delivery_month::DeliveryMonth;
use super::error::InstrumentError;
use super::instrument_kind::InstrumentKind;
use super::option_kind::OptionKind;

/// A European-style option on an energy futures contract.
///
/// Immutable once constructed; the pricing pipeline reads it and
/// produces a result without retaining it. The forward price is not part
/// of the specification: it is resolved from market data at pricing
/// time.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{
///     DeliveryMonth, FuturesOption, InstrumentKind, OptionKind,
/// };
///
/// let option = FuturesOption::new(
///     OptionKind::Call,
///     InstrumentKind::CrudeOil,
///     DeliveryMonth::new(2025, 6).unwrap(),
///     82.50,
/// )
/// .unwrap();
/// assert_eq!(option.strike(), 82.50);
///
/// // Non-positive strikes are rejected.
/// assert!(FuturesOption::new(
///     OptionKind::Call,
///     InstrumentKind::CrudeOil,
///     DeliveryMonth::new(2025, 6).unwrap(),
///     0.0,
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "raw::RawFuturesOption")
)]
pub struct FuturesOption {
    option_kind: OptionKind,
    instrument: InstrumentKind,
    delivery: DeliveryMonth,
    strike: f64,
}

impl FuturesOption {
    /// Creates an option specification with a validated strike.
    ///
    /// # Errors
    /// `InstrumentError::InvalidStrike` when the strike is not a finite
    /// positive number.
    pub fn new(
        option_kind: OptionKind,
        instrument: InstrumentKind,
        delivery: DeliveryMonth,
        strike: f64,
    ) -> Result<Self, InstrumentError> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }

        Ok(Self {
            option_kind,
            instrument,
            delivery,
            strike,
        })
    }

    /// Returns the option kind (call or put).
    #[inline]
    pub fn option_kind(&self) -> OptionKind {
        self.option_kind
    }

    /// Returns the underlying instrument kind.
    #[inline]
    pub fn instrument(&self) -> InstrumentKind {
        self.instrument
    }

    /// Returns the delivery month of the underlying future.
    #[inline]
    pub fn delivery(&self) -> DeliveryMonth {
        self.delivery
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }
}

#[cfg(feature = "serde")]
mod raw {
    //! Deserialisation goes through the validating constructor so the
    //! strike invariant cannot be bypassed by a payload.

    use super::*;

    #[derive(serde::Deserialize)]
    pub struct RawFuturesOption {
        option_kind: OptionKind,
        instrument: InstrumentKind,
        delivery: DeliveryMonth,
        strike: f64,
    }

    impl TryFrom<RawFuturesOption> for FuturesOption {
        type Error = InstrumentError;

        fn try_from(raw: RawFuturesOption) -> Result<Self, InstrumentError> {
            FuturesOption::new(raw.option_kind, raw.instrument, raw.delivery, raw.strike)
        }
    }
}

impl fmt::Display for FuturesOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {}",
            self.option_kind, self.instrument, self.delivery, self.strike
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_2025() -> DeliveryMonth {
        DeliveryMonth::new(2025, 6).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let option = FuturesOption::new(
            OptionKind::Put,
            InstrumentKind::NaturalGas,
            june_2025(),
            3.25,
        )
        .unwrap();
        assert_eq!(option.option_kind(), OptionKind::Put);
        assert_eq!(option.instrument(), InstrumentKind::NaturalGas);
        assert_eq!(option.delivery(), june_2025());
        assert_eq!(option.strike(), 3.25);
    }

    #[test]
    fn test_new_rejects_zero_strike() {
        let result = FuturesOption::new(OptionKind::Call, InstrumentKind::CrudeOil, june_2025(), 0.0);
        assert_eq!(result.unwrap_err(), InstrumentError::InvalidStrike { strike: 0.0 });
    }

    #[test]
    fn test_new_rejects_negative_strike() {
        let result =
            FuturesOption::new(OptionKind::Call, InstrumentKind::CrudeOil, june_2025(), -80.0);
        assert!(matches!(
            result,
            Err(InstrumentError::InvalidStrike { strike }) if strike == -80.0
        ));
    }

    #[test]
    fn test_new_rejects_non_finite_strike() {
        assert!(
            FuturesOption::new(OptionKind::Call, InstrumentKind::CrudeOil, june_2025(), f64::NAN)
                .is_err()
        );
        assert!(FuturesOption::new(
            OptionKind::Call,
            InstrumentKind::CrudeOil,
            june_2025(),
            f64::INFINITY
        )
        .is_err());
    }

    #[test]
    fn test_display() {
        let option =
            FuturesOption::new(OptionKind::Call, InstrumentKind::CrudeOil, june_2025(), 82.5)
                .unwrap();
        assert_eq!(format!("{}", option), "Call Crude Oil 2025-06 @ 82.5");
    }
}
