//! `voltaic price`: price one option against a settlement file.

use std::path::Path;

use tracing::info;

use adapter_feeds::read_quotes_csv;
use pricer_core::calendar::BusinessCalendar;
use pricer_core::types::Date;
use pricer_models::expiry::expiry_date;
use pricer_models::instruments::{DeliveryMonth, FuturesOption, InstrumentKind, OptionKind};
use pricer_pricing::store::InMemoryStore;
use pricer_pricing::PricingEngine;

use crate::config::load_market_params;
use crate::error::Result;

/// Runs the price command.
///
/// Parses the option specification, loads quotes and configuration,
/// prices as of the valuation date (today when omitted), and prints the
/// price together with the time to expiration.
#[allow(clippy::too_many_arguments)]
pub fn run(
    instrument: &str,
    month: &str,
    kind: &str,
    strike: f64,
    quotes_path: &Path,
    date: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let instrument: InstrumentKind = instrument.parse()?;
    let delivery: DeliveryMonth = month.parse()?;
    let kind: OptionKind = kind.parse()?;
    let option = FuturesOption::new(kind, instrument, delivery, strike)?;

    // The clock is resolved here at the edge; everything below takes the
    // valuation date as an explicit input.
    let now = match date {
        Some(s) => Date::parse(s)?,
        None => Date::today(),
    };

    let params = load_market_params(config_path)?;
    let quotes = read_quotes_csv(quotes_path)?;
    info!(count = quotes.len(), "loaded settlement quotes");

    let calendar = calendar_spanning(now, delivery);
    let store: InMemoryStore = quotes.into_iter().collect();
    let engine = PricingEngine::new(store, calendar, params);

    let expiry = expiry_date(instrument, delivery, engine.calendar());
    let result = engine.price(&option, now)?;

    println!("{}", option);
    println!("  valuation date:     {}", now);
    println!("  expiry date:        {}", expiry);
    println!("  time to expiration: {:.6} years", result.time_to_expiration);
    println!("  theoretical price:  {:.4}", result.price);

    Ok(())
}

/// A US federal calendar wide enough for any walk the request can take.
pub(crate) fn calendar_spanning(now: Date, delivery: DeliveryMonth) -> BusinessCalendar {
    let first = now.year().min(delivery.year()) - 1;
    let last = now.year().max(delivery.year()) + 1;
    BusinessCalendar::us_federal(first..=last)
}
