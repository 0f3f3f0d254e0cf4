//! Instrument taxonomy for energy futures options.
//!
//! This module provides:
//! - `InstrumentKind`: closed set of underlying futures families
//! - `OptionKind`: call/put
//! - `DeliveryMonth`: year + month, day normalised away
//! - `FuturesOption`: the immutable option specification
//! - `InstrumentError`: parse and validation failures

mod delivery_month;
mod error;
mod futures_option;
mod instrument_kind;
mod option_kind;

pub use delivery_month::DeliveryMonth;
pub use error::InstrumentError;
pub use futures_option::FuturesOption;
pub use instrument_kind::InstrumentKind;
pub use option_kind::OptionKind;
