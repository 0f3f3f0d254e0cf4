//! Analytical pricing formulas.
//!
//! This module provides the closed-form machinery for European options
//! on futures:
//! - Black-76 model (`black76`)
//! - Standard normal distribution functions (`distributions`)
//!
//! All computations are pure f64 arithmetic with inputs validated before
//! any formula is evaluated.

pub mod black76;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black76::Black76;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
