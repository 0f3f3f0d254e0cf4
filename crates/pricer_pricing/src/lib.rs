//! # pricer_pricing: Pricing Orchestration and Market Data Store
//!
//! ## Layer Role
//!
//! pricer_pricing sits on top of the kernel crates and exposes the one
//! call the service layer needs: price an option specification against
//! the latest market data as of an explicit valuation date.
//!
//! - `store`: `MarketStore` trait, `MarketQuote`, and the in-memory
//!   reference implementation
//! - `engine`: `PricingEngine`, `MarketParams`, `PricingResult`
//! - `error`: `PriceError`, the transparent aggregate of every failure
//!   kind in the pipeline
//!
//! ## Concurrency
//!
//! The pipeline is pure and stateless between requests; the only shared
//! resource is the store, which is read with a single lookup per request
//! and never written by the engine. Any number of callers may price
//! concurrently against a shared store without locking.
//!
//! ## Usage
//!
//! ```rust
//! use pricer_core::calendar::BusinessCalendar;
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{
//!     DeliveryMonth, FuturesOption, InstrumentKind, OptionKind,
//! };
//! use pricer_pricing::store::{InMemoryStore, MarketQuote};
//! use pricer_pricing::{MarketParams, PricingEngine};
//!
//! let delivery = DeliveryMonth::new(2025, 3).unwrap();
//! let mut store = InMemoryStore::new();
//! store.insert(
//!     MarketQuote::new(
//!         Date::from_ymd(2024, 12, 2).unwrap(),
//!         InstrumentKind::NaturalGas,
//!         delivery,
//!         3.05,
//!     )
//!     .unwrap(),
//! );
//!
//! let engine = PricingEngine::new(
//!     store,
//!     BusinessCalendar::us_federal(2024..=2026),
//!     MarketParams::default(),
//! );
//! let option =
//!     FuturesOption::new(OptionKind::Put, InstrumentKind::NaturalGas, delivery, 3.00).unwrap();
//!
//! let result = engine
//!     .price(&option, Date::from_ymd(2024, 12, 2).unwrap())
//!     .unwrap();
//! assert!(result.price > 0.0);
//! ```

pub mod engine;
pub mod error;
pub mod store;

pub use engine::{MarketParams, PricingEngine, PricingResult};
pub use error::PriceError;
pub use store::{InMemoryStore, MarketQuote, MarketStore, StoreError};
