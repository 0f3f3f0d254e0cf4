//! CLI error type and user-facing message mapping.

use thiserror::Error;

use adapter_feeds::FeedError;
use pricer_core::types::DateError;
use pricer_models::instruments::InstrumentError;
use pricer_pricing::PriceError;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error.
///
/// Wraps every failure kind the commands can hit; `user_message` maps
/// each to the one-line text shown to the user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing pipeline failure.
    #[error(transparent)]
    Price(#[from] PriceError),

    /// Feed file failure.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Argument parse failure: dates and months.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Argument parse failure: instrument, option kind, strike.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Configuration file failure.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CliError {
    /// One-line message for the user, by failure kind.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Price(PriceError::NoMarketData { instrument, delivery }) => {
                format!("No market data found for {} {}.", instrument, delivery)
            }
            CliError::Price(PriceError::Date(DateError::ExpiredOrInvalid { .. })) => {
                "Time to expiry must be positive and non-zero.".to_string()
            }
            other => other.to_string(),
        }
    }
}
