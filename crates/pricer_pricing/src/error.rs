//! Error type for the pricing pipeline.

use thiserror::Error;

use pricer_core::types::DateError;
use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::{DeliveryMonth, InstrumentError, InstrumentKind};

/// Failures of a single pricing request.
///
/// Every kind is terminal for the request: nothing is retried and no
/// failure is downgraded to a default price. Lower-level kinds pass
/// through transparently so callers can still distinguish "no data" from
/// "bad date math" from "bad pricing input".
///
/// # Examples
/// ```
/// use pricer_models::instruments::{DeliveryMonth, InstrumentKind};
/// use pricer_pricing::PriceError;
///
/// let err = PriceError::NoMarketData {
///     instrument: InstrumentKind::CrudeOil,
///     delivery: DeliveryMonth::new(2025, 6).unwrap(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "No market data for Crude Oil 2025-06"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    /// No quote exists for the requested instrument and delivery month.
    #[error("No market data for {instrument} {delivery}")]
    NoMarketData {
        /// The instrument looked up.
        instrument: InstrumentKind,
        /// The delivery month looked up.
        delivery: DeliveryMonth,
    },

    /// Date failure, including `ExpiredOrInvalid` from the
    /// time-to-expiration converter.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Instrument parse or validation failure.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Black-76 precondition failure (`InvalidPricingInput`).
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),
}
