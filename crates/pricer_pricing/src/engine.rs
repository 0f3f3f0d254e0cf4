//! Pricing orchestration.
//!
//! `PricingEngine` binds the three collaborators a pricing request needs
//! (market data store, business-day calendar, market parameters) and
//! runs the pipeline:
//!
//! 1. resolve the latest settlement quote for the option's contract
//! 2. derive the contract's expiry date from its delivery month
//! 3. convert expiry to a year fraction relative to the valuation date
//! 4. evaluate Black-76
//!
//! Each step fails fast with its own error kind; nothing is retried and
//! nothing is downgraded to a default price.

use tracing::debug;

use pricer_core::calendar::BusinessCalendar;
use pricer_core::types::{time_to_expiration, Date};
use pricer_models::analytical::Black76;
use pricer_models::expiry::expiry_date;
use pricer_models::instruments::FuturesOption;

use crate::error::PriceError;
use crate::store::MarketStore;

/// Market-level pricing assumptions.
///
/// Explicit configuration rather than constants buried in the formula,
/// so the engine can be driven by different assumptions without code
/// change.
///
/// # Examples
///
/// ```
/// use pricer_pricing::MarketParams;
///
/// let params = MarketParams::default();
/// assert_eq!(params.risk_free_rate, 0.05);
/// assert_eq!(params.volatility, 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarketParams {
    /// Continuously compounded risk-free rate.
    pub risk_free_rate: f64,
    /// Flat lognormal volatility.
    pub volatility: f64,
}

impl Default for MarketParams {
    /// Documented defaults: 5% rate, 20% volatility.
    fn default() -> Self {
        Self {
            risk_free_rate: 0.05,
            volatility: 0.20,
        }
    }
}

/// Result of a single pricing request.
///
/// Ephemeral: produced per request and handed straight back to the
/// caller, which typically displays both fields.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Theoretical option price (non-negative).
    pub price: f64,
    /// Time to expiration in years (positive, fixed-365).
    pub time_to_expiration: f64,
}

/// Orchestrates a pricing request against a market data store.
///
/// The engine itself is stateless between requests; the store is read
/// with a single lookup per request and never written.
///
/// # Examples
///
/// ```
/// use pricer_core::calendar::BusinessCalendar;
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{
///     DeliveryMonth, FuturesOption, InstrumentKind, OptionKind,
/// };
/// use pricer_pricing::store::{InMemoryStore, MarketQuote};
/// use pricer_pricing::{MarketParams, PricingEngine};
///
/// let delivery = DeliveryMonth::new(2025, 6).unwrap();
/// let mut store = InMemoryStore::new();
/// store.insert(
///     MarketQuote::new(
///         Date::from_ymd(2025, 1, 2).unwrap(),
///         InstrumentKind::CrudeOil,
///         delivery,
///         80.0,
///     )
///     .unwrap(),
/// );
///
/// let engine = PricingEngine::new(
///     store,
///     BusinessCalendar::us_federal(2024..=2026),
///     MarketParams::default(),
/// );
///
/// let option =
///     FuturesOption::new(OptionKind::Call, InstrumentKind::CrudeOil, delivery, 80.0).unwrap();
/// let result = engine
///     .price(&option, Date::from_ymd(2025, 1, 2).unwrap())
///     .unwrap();
/// assert!(result.price > 0.0);
/// assert!(result.time_to_expiration > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PricingEngine<S> {
    store: S,
    calendar: BusinessCalendar,
    params: MarketParams,
}

impl<S: MarketStore> PricingEngine<S> {
    /// Creates an engine over a store, a calendar, and market parameters.
    pub fn new(store: S, calendar: BusinessCalendar, params: MarketParams) -> Self {
        Self {
            store,
            calendar,
            params,
        }
    }

    /// Returns the market parameters in use.
    #[inline]
    pub fn params(&self) -> MarketParams {
        self.params
    }

    /// Returns the calendar in use.
    #[inline]
    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    /// Prices a European option as of the given valuation date.
    ///
    /// The valuation date is explicit so pricing is deterministic;
    /// callers that want "now" resolve the clock at the edge.
    ///
    /// # Errors
    /// - `PriceError::NoMarketData`: no quote for the contract
    /// - `DateError::ExpiredOrInvalid`: the option has expired
    /// - `AnalyticalError::InvalidPricingInput`: a formula precondition
    ///   failed
    pub fn price(&self, option: &FuturesOption, now: Date) -> Result<PricingResult, PriceError> {
        let quote = self
            .store
            .latest_quote(option.instrument(), option.delivery())
            .ok_or(PriceError::NoMarketData {
                instrument: option.instrument(),
                delivery: option.delivery(),
            })?;
        debug!(
            settlement = %quote.settlement_date(),
            forward = quote.futures_price(),
            "resolved latest quote"
        );

        let expiry = expiry_date(option.instrument(), option.delivery(), &self.calendar);
        let year_fraction = time_to_expiration(expiry, now)?;
        debug!(%expiry, year_fraction, "resolved expiry");

        let model = Black76::new(
            quote.futures_price(),
            self.params.risk_free_rate,
            self.params.volatility,
        )?;
        let price = model.price(option.option_kind(), option.strike(), year_fraction)?;
        debug!(price, "priced option");

        Ok(PricingResult {
            price,
            time_to_expiration: year_fraction,
        })
    }
}
