//! `voltaic expiry`: show the expiry date for a contract month.

use pricer_models::expiry::{expiry_date, target_date};
use pricer_models::instruments::{DeliveryMonth, InstrumentKind};

use crate::commands::price::calendar_spanning;
use crate::error::Result;
use pricer_core::types::Date;

/// Runs the expiry command.
///
/// Prints the rule's target date and the resulting expiry for the given
/// instrument and delivery month.
pub fn run(instrument: &str, month: &str) -> Result<()> {
    let instrument: InstrumentKind = instrument.parse()?;
    let delivery: DeliveryMonth = month.parse()?;

    let calendar = calendar_spanning(Date::today(), delivery);
    let target = target_date(instrument, delivery);
    let expiry = expiry_date(instrument, delivery, &calendar);

    println!("{} {}", instrument, delivery);
    println!("  rule target: {}", target);
    println!("  expiry date: {} ({:?})", expiry, expiry.weekday());

    Ok(())
}
