//! Error types for instrument construction and parsing.

use thiserror::Error;

/// Instrument taxonomy errors.
///
/// The instrument and option kinds form closed sets: anything outside
/// them is rejected here, at the boundary where names arrive as strings,
/// rather than falling through a dispatch arm.
///
/// # Variants
/// - `UnsupportedInstrument`: Instrument name outside the closed rule set
/// - `UnknownOptionKind`: Option kind outside {Call, Put}
/// - `InvalidStrike`: Non-positive or non-finite strike price
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::UnsupportedInstrument {
///     name: "Brent".to_string(),
/// };
/// assert_eq!(format!("{}", err), "Unsupported instrument: Brent");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// Instrument name not in the closed rule set.
    #[error("Unsupported instrument: {name}")]
    UnsupportedInstrument {
        /// The name that failed to resolve.
        name: String,
    },

    /// Option kind outside {Call, Put}.
    #[error("Unknown option kind: {name}")]
    UnknownOptionKind {
        /// The name that failed to resolve.
        name: String,
    },

    /// Non-positive or non-finite strike price.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value.
        strike: f64,
    },
}
