//! EIA v2 settlement payload parsing.
//!
//! The feed job fetches daily futures settlements from the EIA open data
//! API (`/v2/petroleum/pri/fut/data/`) out-of-band; this module turns a
//! response body it has already received into normalised market quotes.
//!
//! Rows either carry an explicit delivery month or a contract label like
//! `"Future Contract 1"`. Labelled rows are resolved against the
//! settlement date: contract 1 is the front month, delivering two months
//! after the settlement month, and each further contract adds one month.

use serde::Deserialize;
use tracing::debug;

use pricer_core::types::Date;
use pricer_models::instruments::{DeliveryMonth, InstrumentKind};
use pricer_pricing::store::MarketQuote;

use crate::error::FeedError;

/// Months from a settlement month to the front contract's delivery.
const FRONT_CONTRACT_DELIVERY_OFFSET: u32 = 2;

/// Top-level EIA v2 response body.
#[derive(Debug, Deserialize)]
pub struct EiaResponse {
    /// Payload envelope.
    pub response: EiaData,
}

/// Data section of an EIA v2 response.
#[derive(Debug, Deserialize)]
pub struct EiaData {
    /// Settlement rows; absent sections parse as empty.
    #[serde(default)]
    pub data: Vec<EiaRow>,
}

/// One daily settlement row.
#[derive(Debug, Deserialize)]
pub struct EiaRow {
    /// Settlement date, ISO 8601.
    pub period: String,
    /// Product name, e.g. "Crude Oil".
    #[serde(rename = "product-name")]
    pub product_name: String,
    /// Delivery month or contract label, e.g. "Future Contract 1".
    #[serde(rename = "process-name")]
    pub process_name: String,
    /// Settlement price.
    pub value: f64,
}

/// Parses an EIA v2 response body into market quotes.
///
/// # Errors
/// Fails on malformed JSON, unknown product names, unrecognised delivery
/// fields, or non-positive prices. A failing row fails the whole batch;
/// the feed job decides whether to refetch.
///
/// # Examples
///
/// ```
/// use adapter_feeds::eia::parse_eia_response;
///
/// let body = r#"{
///     "response": {
///         "data": [{
///             "period": "2025-01-02",
///             "product-name": "Crude Oil",
///             "process-name": "Future Contract 1",
///             "value": 80.15
///         }]
///     }
/// }"#;
///
/// let quotes = parse_eia_response(body).unwrap();
/// assert_eq!(quotes.len(), 1);
/// // Front month settles two months forward: 2025-03.
/// assert_eq!(quotes[0].delivery().month(), 3);
/// ```
pub fn parse_eia_response(body: &str) -> Result<Vec<MarketQuote>, FeedError> {
    let envelope: EiaResponse = serde_json::from_str(body)?;

    let mut quotes = Vec::with_capacity(envelope.response.data.len());
    for row in &envelope.response.data {
        quotes.push(quote_from_row(row)?);
    }

    debug!(count = quotes.len(), "parsed EIA settlement rows");
    Ok(quotes)
}

fn quote_from_row(row: &EiaRow) -> Result<MarketQuote, FeedError> {
    let settlement = Date::parse(&row.period)?;
    let instrument: InstrumentKind = row.product_name.parse()?;
    let delivery = delivery_from_process(&row.process_name, settlement)?;
    Ok(MarketQuote::new(settlement, instrument, delivery, row.value)?)
}

/// Resolves the delivery month of a row.
///
/// Explicit months ("2025-03" or a full date, normalised to the month)
/// win; otherwise `"Future Contract n"` labels are resolved relative to
/// the settlement date.
fn delivery_from_process(process: &str, settlement: Date) -> Result<DeliveryMonth, FeedError> {
    if let Ok(month) = process.parse::<DeliveryMonth>() {
        return Ok(month);
    }

    if let Some(rest) = process.strip_prefix("Future Contract ") {
        if let Ok(n) = rest.trim().parse::<u32>() {
            if n >= 1 {
                let offset = FRONT_CONTRACT_DELIVERY_OFFSET + (n - 1);
                return Ok(DeliveryMonth::from_date(settlement).add_months(offset));
            }
        }
    }

    Err(FeedError::UnrecognisedDelivery {
        value: process.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(period: &str, product: &str, process: &str, value: f64) -> String {
        format!(
            r#"{{"period": "{}", "product-name": "{}", "process-name": "{}", "value": {}}}"#,
            period, product, process, value
        )
    }

    fn body(rows: &[String]) -> String {
        format!(r#"{{"response": {{"data": [{}]}}}}"#, rows.join(","))
    }

    #[test]
    fn test_front_month_delivery_inference() {
        let body = body(&[row("2024-11-15", "Crude Oil", "Future Contract 1", 78.9)]);
        let quotes = parse_eia_response(&body).unwrap();
        assert_eq!(quotes.len(), 1);
        // November settlement, front month delivers January next year.
        assert_eq!(quotes[0].delivery(), DeliveryMonth::new(2025, 1).unwrap());
        assert_eq!(quotes[0].instrument(), InstrumentKind::CrudeOil);
        assert_eq!(quotes[0].futures_price(), 78.9);
    }

    #[test]
    fn test_later_contracts_step_one_month_each() {
        let body = body(&[
            row("2025-01-02", "Crude Oil", "Future Contract 2", 79.5),
            row("2025-01-02", "Crude Oil", "Future Contract 4", 78.8),
        ]);
        let quotes = parse_eia_response(&body).unwrap();
        assert_eq!(quotes[0].delivery(), DeliveryMonth::new(2025, 4).unwrap());
        assert_eq!(quotes[1].delivery(), DeliveryMonth::new(2025, 6).unwrap());
    }

    #[test]
    fn test_explicit_delivery_month_wins() {
        let body = body(&[row("2025-01-02", "Natural Gas", "2025-09", 3.15)]);
        let quotes = parse_eia_response(&body).unwrap();
        assert_eq!(quotes[0].delivery(), DeliveryMonth::new(2025, 9).unwrap());
    }

    #[test]
    fn test_full_date_delivery_is_normalised() {
        let body = body(&[row("2025-01-02", "Natural Gas", "2025-09-15", 3.15)]);
        let quotes = parse_eia_response(&body).unwrap();
        assert_eq!(quotes[0].delivery(), DeliveryMonth::new(2025, 9).unwrap());
    }

    #[test]
    fn test_unknown_product_rejected() {
        let body = body(&[row("2025-01-02", "Propane", "Future Contract 1", 0.85)]);
        assert!(matches!(
            parse_eia_response(&body).unwrap_err(),
            FeedError::Instrument(_)
        ));
    }

    #[test]
    fn test_unrecognised_process_rejected() {
        let body = body(&[row("2025-01-02", "Crude Oil", "Spot Price", 80.0)]);
        assert!(matches!(
            parse_eia_response(&body).unwrap_err(),
            FeedError::UnrecognisedDelivery { .. }
        ));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let body = body(&[row("2025-01-02", "Crude Oil", "Future Contract 1", -1.0)]);
        assert!(matches!(
            parse_eia_response(&body).unwrap_err(),
            FeedError::Quote(_)
        ));
    }

    #[test]
    fn test_empty_data_section() {
        let quotes = parse_eia_response(r#"{"response": {}}"#).unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            parse_eia_response("{not json").unwrap_err(),
            FeedError::Json(_)
        ));
    }
}
