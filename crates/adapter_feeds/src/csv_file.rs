//! Settlement CSV parsing.
//!
//! Reads offline settlement files with the columns
//! `settlement_date,product_name,delivery_month,futures_price` into
//! normalised market quotes. Delivery months may be written as
//! `YYYY-MM` or as a full date, whose day component is dropped.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use pricer_core::types::Date;
use pricer_models::instruments::{DeliveryMonth, InstrumentKind};
use pricer_pricing::store::MarketQuote;

use crate::error::FeedError;

/// One row of a settlement CSV, as written by the feed job.
#[derive(Debug, Deserialize)]
struct SettlementRecord {
    settlement_date: String,
    product_name: String,
    delivery_month: String,
    futures_price: f64,
}

/// Reads market quotes from a settlement CSV file.
///
/// # Errors
/// Fails on unreadable files, malformed rows, unknown product names,
/// invalid dates, or non-positive prices.
pub fn read_quotes_csv(path: impl AsRef<Path>) -> Result<Vec<MarketQuote>, FeedError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let quotes = parse_quotes_csv(file)?;
    debug!(path = %path.display(), count = quotes.len(), "loaded settlement CSV");
    Ok(quotes)
}

/// Parses market quotes from CSV bytes.
///
/// # Examples
///
/// ```
/// use adapter_feeds::csv_file::parse_quotes_csv;
///
/// let csv = "\
/// settlement_date,product_name,delivery_month,futures_price
/// 2025-01-02,Crude Oil,2025-06,80.15
/// 2025-01-02,Natural Gas,2025-03,3.40
/// ";
///
/// let quotes = parse_quotes_csv(csv.as_bytes()).unwrap();
/// assert_eq!(quotes.len(), 2);
/// assert_eq!(quotes[0].futures_price(), 80.15);
/// ```
pub fn parse_quotes_csv(reader: impl Read) -> Result<Vec<MarketQuote>, FeedError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut quotes = Vec::new();
    for record in csv_reader.deserialize::<SettlementRecord>() {
        let record = record?;
        let settlement = Date::parse(&record.settlement_date)?;
        let instrument: InstrumentKind = record.product_name.parse()?;
        let delivery: DeliveryMonth = record.delivery_month.parse()?;
        quotes.push(MarketQuote::new(
            settlement,
            instrument,
            delivery,
            record.futures_price,
        )?);
    }

    Ok(quotes)
}
