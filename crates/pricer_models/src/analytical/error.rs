//! Error types for analytical pricing.

use thiserror::Error;

/// Analytical pricing errors.
///
/// Every precondition failure of the closed-form pricer maps to
/// `InvalidPricingInput` with the offending parameter named; the formula
/// is never evaluated with inputs that would produce NaN or infinity,
/// and no result is ever clamped in place of an error.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidPricingInput {
///     parameter: "volatility",
///     value: 0.0,
/// };
/// assert_eq!(format!("{}", err), "Invalid pricing input: volatility = 0");
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum AnalyticalError {
    /// A pricing input outside its valid domain (σ ≤ 0, T ≤ 0, F ≤ 0,
    /// K ≤ 0, or a non-finite value).
    #[error("Invalid pricing input: {parameter} = {value}")]
    InvalidPricingInput {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
}
