//! # pricer_models: Instruments, Expiry Rules, and the Black-76 Pricer
//!
//! ## Layer Role
//!
//! pricer_models is the kernel layer of the workspace, providing:
//! - Instrument taxonomy: `InstrumentKind`, `OptionKind`, `DeliveryMonth`,
//!   `FuturesOption` (`instruments`)
//! - Per-instrument expiry rules over a business-day calendar (`expiry`)
//! - Closed-form Black-76 pricing with normal distribution helpers
//!   (`analytical`)
//!
//! Everything here is pure and stateless: no clocks, no I/O, and no
//! shared mutable state, so all entry points can run concurrently
//! without locking.
//!
//! ## Usage
//!
//! ```rust
//! use pricer_core::calendar::BusinessCalendar;
//! use pricer_models::analytical::Black76;
//! use pricer_models::expiry::expiry_date;
//! use pricer_models::instruments::{DeliveryMonth, InstrumentKind, OptionKind};
//!
//! let calendar = BusinessCalendar::us_federal(2024..=2026);
//! let delivery = DeliveryMonth::new(2025, 6).unwrap();
//! let expiry = expiry_date(InstrumentKind::CrudeOil, delivery, &calendar);
//! assert!(expiry < delivery.first_day());
//!
//! let model = Black76::new(80.0, 0.05, 0.20).unwrap();
//! let price = model.price(OptionKind::Call, 82.5, 0.25).unwrap();
//! assert!(price > 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): string-based serialisation for the instrument
//!   taxonomy

pub mod analytical;
pub mod expiry;
pub mod instruments;

pub use analytical::{AnalyticalError, Black76};
pub use instruments::{
    DeliveryMonth, FuturesOption, InstrumentError, InstrumentKind, OptionKind,
};
