//! Market data store abstraction.
//!
//! The orchestrator treats market data as an opaque key lookup: given an
//! instrument kind and a delivery month, return the most recent
//! settlement quote. How the store is populated (the feed job) and
//! persisted is owned by collaborators behind the `MarketStore` trait;
//! `InMemoryStore` is the reference implementation used by the service
//! layer and tests.

use thiserror::Error;

use pricer_core::types::Date;
use pricer_models::instruments::{DeliveryMonth, InstrumentKind};

/// Market data store errors.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum StoreError {
    /// Non-positive or non-finite futures price.
    #[error("Invalid quote: futures price = {price}")]
    InvalidQuote {
        /// The rejected price.
        price: f64,
    },
}

/// A daily settlement quote for one futures contract.
///
/// Delivery months are normalised (year + month only) so quotes key
/// exactly against option specifications.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{DeliveryMonth, InstrumentKind};
/// use pricer_pricing::store::MarketQuote;
///
/// let quote = MarketQuote::new(
///     Date::from_ymd(2025, 1, 2).unwrap(),
///     InstrumentKind::CrudeOil,
///     DeliveryMonth::new(2025, 6).unwrap(),
///     80.15,
/// )
/// .unwrap();
/// assert_eq!(quote.futures_price(), 80.15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "raw::RawMarketQuote")
)]
pub struct MarketQuote {
    settlement_date: Date,
    instrument: InstrumentKind,
    delivery: DeliveryMonth,
    futures_price: f64,
}

impl MarketQuote {
    /// Creates a quote with a validated futures price.
    ///
    /// # Errors
    /// `StoreError::InvalidQuote` when the price is not a finite positive
    /// number.
    pub fn new(
        settlement_date: Date,
        instrument: InstrumentKind,
        delivery: DeliveryMonth,
        futures_price: f64,
    ) -> Result<Self, StoreError> {
        if !futures_price.is_finite() || futures_price <= 0.0 {
            return Err(StoreError::InvalidQuote {
                price: futures_price,
            });
        }

        Ok(Self {
            settlement_date,
            instrument,
            delivery,
            futures_price,
        })
    }

    /// Returns the settlement date.
    #[inline]
    pub fn settlement_date(&self) -> Date {
        self.settlement_date
    }

    /// Returns the instrument kind.
    #[inline]
    pub fn instrument(&self) -> InstrumentKind {
        self.instrument
    }

    /// Returns the delivery month.
    #[inline]
    pub fn delivery(&self) -> DeliveryMonth {
        self.delivery
    }

    /// Returns the settlement price of the futures contract.
    #[inline]
    pub fn futures_price(&self) -> f64 {
        self.futures_price
    }
}

#[cfg(feature = "serde")]
mod raw {
    //! Deserialisation goes through the validating constructor so the
    //! price invariant cannot be bypassed by a payload.

    use super::*;

    #[derive(serde::Deserialize)]
    pub struct RawMarketQuote {
        settlement_date: Date,
        instrument: InstrumentKind,
        delivery: DeliveryMonth,
        futures_price: f64,
    }

    impl TryFrom<RawMarketQuote> for MarketQuote {
        type Error = StoreError;

        fn try_from(raw: RawMarketQuote) -> Result<Self, StoreError> {
            MarketQuote::new(
                raw.settlement_date,
                raw.instrument,
                raw.delivery,
                raw.futures_price,
            )
        }
    }
}

/// Read side of the market data store.
///
/// A lookup is a single atomic read returning the latest quote as of
/// call time; the pricing pipeline performs no retries and no writes.
pub trait MarketStore {
    /// Returns the most recent quote for an exact (instrument, delivery
    /// month) match, or `None` when the store holds no such contract.
    ///
    /// "Most recent" is the greatest settlement date among matches.
    fn latest_quote(
        &self,
        instrument: InstrumentKind,
        delivery: DeliveryMonth,
    ) -> Option<MarketQuote>;
}

/// In-memory quote store.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{DeliveryMonth, InstrumentKind};
/// use pricer_pricing::store::{InMemoryStore, MarketQuote, MarketStore};
///
/// let delivery = DeliveryMonth::new(2025, 6).unwrap();
/// let mut store = InMemoryStore::new();
/// store.insert(
///     MarketQuote::new(
///         Date::from_ymd(2025, 1, 2).unwrap(),
///         InstrumentKind::CrudeOil,
///         delivery,
///         80.15,
///     )
///     .unwrap(),
/// );
///
/// let quote = store.latest_quote(InstrumentKind::CrudeOil, delivery).unwrap();
/// assert_eq!(quote.futures_price(), 80.15);
/// assert!(store.latest_quote(InstrumentKind::NaturalGas, delivery).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    quotes: Vec<MarketQuote>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a quote to the store.
    pub fn insert(&mut self, quote: MarketQuote) {
        self.quotes.push(quote);
    }

    /// Number of quotes held.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true when the store holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Distinct delivery months quoted for an instrument, ascending.
    ///
    /// This is what a front end offers for selection: only contracts
    /// that actually have market data.
    pub fn delivery_months(&self, instrument: InstrumentKind) -> Vec<DeliveryMonth> {
        let mut months: Vec<DeliveryMonth> = self
            .quotes
            .iter()
            .filter(|q| q.instrument == instrument)
            .map(|q| q.delivery)
            .collect();
        months.sort_unstable();
        months.dedup();
        months
    }
}

impl Extend<MarketQuote> for InMemoryStore {
    fn extend<I: IntoIterator<Item = MarketQuote>>(&mut self, iter: I) {
        self.quotes.extend(iter);
    }
}

impl FromIterator<MarketQuote> for InMemoryStore {
    fn from_iter<I: IntoIterator<Item = MarketQuote>>(iter: I) -> Self {
        Self {
            quotes: iter.into_iter().collect(),
        }
    }
}

impl MarketStore for InMemoryStore {
    fn latest_quote(
        &self,
        instrument: InstrumentKind,
        delivery: DeliveryMonth,
    ) -> Option<MarketQuote> {
        self.quotes
            .iter()
            .filter(|q| q.instrument == instrument && q.delivery == delivery)
            .max_by_key(|q| q.settlement_date)
            .copied()
    }
}
