//! # adapter_feeds: Settlement Feed Parsing
//!
//! ## Layer Role
//!
//! adapter_feeds is the input adapter of the workspace: it turns
//! external settlement payloads into validated `MarketQuote` values for
//! the market data store. Transport (HTTP, scheduling, retries) is owned
//! by the feed job around it; this crate only interprets bytes.
//!
//! - `eia`: EIA v2 petroleum futures JSON payloads, including
//!   front-month delivery inference for contract-labelled rows
//! - `csv_file`: offline settlement CSV files
//! - `error`: `FeedError`
//!
//! ## Usage
//!
//! ```rust
//! use adapter_feeds::csv_file::parse_quotes_csv;
//! use pricer_pricing::store::InMemoryStore;
//!
//! let csv = "\
//! settlement_date,product_name,delivery_month,futures_price
//! 2025-01-02,Crude Oil,2025-06,80.15
//! ";
//!
//! let store: InMemoryStore = parse_quotes_csv(csv.as_bytes()).unwrap().into_iter().collect();
//! assert_eq!(store.len(), 1);
//! ```

pub mod csv_file;
pub mod eia;
pub mod error;

pub use csv_file::{parse_quotes_csv, read_quotes_csv};
pub use eia::parse_eia_response;
pub use error::FeedError;
