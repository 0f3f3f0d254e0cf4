//! Error types for feed parsing.

use std::path::PathBuf;
use thiserror::Error;

use pricer_core::types::DateError;
use pricer_models::instruments::InstrumentError;
use pricer_pricing::store::StoreError;

/// Failures while turning an external payload into market quotes.
///
/// Transport is out of scope for this crate; every variant is about
/// reading or interpreting bytes that have already arrived.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Failed to read a feed file.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON payload.
    #[error("Malformed feed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed CSV row.
    #[error("Malformed settlement CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Delivery field neither a month nor a recognised contract label.
    #[error("Unrecognised delivery field: {value:?}")]
    UnrecognisedDelivery {
        /// The field content that failed to resolve.
        value: String,
    },

    /// Date field failed to parse or validate.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Product name outside the supported instrument set.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Quote failed validation (non-positive price).
    #[error(transparent)]
    Quote(#[from] StoreError),
}
