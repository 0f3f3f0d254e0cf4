//! Black-76 pricing model for European options on futures.
//!
//! The Black-76 model is the Black-Scholes variant that prices off the
//! forward rather than the spot, which is the standard choice for
//! options on commodity futures.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = e^(-rT)·(F·N(d₁) - K·N(d₂))
//! **Put Price**: P = e^(-rT)·(K·N(-d₂) - F·N(-d₁))
//!
//! Where:
//! - d₁ = (ln(F/K) + (σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::OptionKind;

/// Black-76 model for European options on a futures contract.
///
/// Holds the market-level inputs (forward, rate, volatility); strike and
/// time to expiration arrive per pricing call. All computations are pure
/// and allocation-free.
///
/// # Examples
/// ```
/// use pricer_models::analytical::Black76;
/// use pricer_models::instruments::OptionKind;
///
/// let model = Black76::new(80.0, 0.05, 0.20).unwrap();
/// let call = model.price(OptionKind::Call, 80.0, 0.25).unwrap();
/// let put = model.price(OptionKind::Put, 80.0, 0.25).unwrap();
///
/// // At the money the forward discounts out of parity entirely:
/// // C - P = e^(-rT)·(F - K) = 0.
/// assert!((call - put).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Black76 {
    /// Forward (futures settlement) price (F)
    forward: f64,
    /// Continuously compounded risk-free rate (r)
    rate: f64,
    /// Lognormal volatility (σ)
    volatility: f64,
}

impl Black76 {
    /// Creates a new Black-76 model.
    ///
    /// # Arguments
    /// * `forward` - Futures price (must be finite and positive)
    /// * `rate` - Risk-free rate, annualised; any finite value
    /// * `volatility` - Lognormal volatility (must be finite and positive)
    ///
    /// # Errors
    /// `AnalyticalError::InvalidPricingInput` naming the offending
    /// parameter. A zero volatility is rejected here rather than
    /// propagating a division by zero out of d₁.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::Black76;
    ///
    /// assert!(Black76::new(80.0, 0.05, 0.20).is_ok());
    /// assert!(Black76::new(-80.0, 0.05, 0.20).is_err());
    /// assert!(Black76::new(80.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(forward: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !forward.is_finite() || forward <= 0.0 {
            return Err(AnalyticalError::InvalidPricingInput {
                parameter: "forward",
                value: forward,
            });
        }

        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidPricingInput {
                parameter: "rate",
                value: rate,
            });
        }

        if !volatility.is_finite() || volatility <= 0.0 {
            return Err(AnalyticalError::InvalidPricingInput {
                parameter: "volatility",
                value: volatility,
            });
        }

        Ok(Self {
            forward,
            rate,
            volatility,
        })
    }

    /// Returns the forward price.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.forward
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Prices a European option on the forward.
    ///
    /// # Arguments
    /// * `kind` - Call or put
    /// * `strike` - Strike price (must be finite and positive)
    /// * `expiry` - Time to expiration in years (must be finite and positive)
    ///
    /// # Errors
    /// `AnalyticalError::InvalidPricingInput` for a non-positive or
    /// non-finite strike or expiry; a zero expiry is an error, never an
    /// intrinsic-value fallback.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::Black76;
    /// use pricer_models::instruments::OptionKind;
    ///
    /// let model = Black76::new(80.0, 0.05, 0.20).unwrap();
    ///
    /// let price = model.price(OptionKind::Call, 75.0, 0.5).unwrap();
    /// assert!(price > 0.0);
    ///
    /// assert!(model.price(OptionKind::Call, 75.0, 0.0).is_err());
    /// ```
    pub fn price(
        &self,
        kind: OptionKind,
        strike: f64,
        expiry: f64,
    ) -> Result<f64, AnalyticalError> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(AnalyticalError::InvalidPricingInput {
                parameter: "strike",
                value: strike,
            });
        }

        if !expiry.is_finite() || expiry <= 0.0 {
            return Err(AnalyticalError::InvalidPricingInput {
                parameter: "expiry",
                value: expiry,
            });
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        let price = match kind {
            OptionKind::Call => {
                discount * (self.forward * norm_cdf(d1) - strike * norm_cdf(d2))
            }
            OptionKind::Put => {
                discount * (strike * norm_cdf(-d2) - self.forward * norm_cdf(-d1))
            }
        };

        Ok(price)
    }

    /// The d₁ term: (ln(F/K) + (σ²/2)T) / (σ√T).
    ///
    /// Inputs are validated by `price` before this runs.
    #[inline]
    fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.forward / strike).ln();
        (log_moneyness + 0.5 * self.volatility * self.volatility * expiry) / vol_sqrt_t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_model() -> Black76 {
        Black76::new(80.0, 0.05, 0.20).unwrap()
    }

    // ==========================================================
    // Constructor tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let model = reference_model();
        assert_eq!(model.forward(), 80.0);
        assert_eq!(model.rate(), 0.05);
        assert_eq!(model.volatility(), 0.20);
    }

    #[test]
    fn test_new_rejects_non_positive_forward() {
        for forward in [0.0, -80.0] {
            let err = Black76::new(forward, 0.05, 0.2).unwrap_err();
            assert_eq!(
                err,
                AnalyticalError::InvalidPricingInput {
                    parameter: "forward",
                    value: forward,
                }
            );
        }
    }

    #[test]
    fn test_new_rejects_non_positive_volatility() {
        for volatility in [0.0, -0.2] {
            let err = Black76::new(80.0, 0.05, volatility).unwrap_err();
            assert_eq!(
                err,
                AnalyticalError::InvalidPricingInput {
                    parameter: "volatility",
                    value: volatility,
                }
            );
        }
    }

    #[test]
    fn test_new_rejects_non_finite_inputs() {
        assert!(Black76::new(f64::NAN, 0.05, 0.2).is_err());
        assert!(Black76::new(80.0, f64::INFINITY, 0.2).is_err());
        assert!(Black76::new(80.0, 0.05, f64::NAN).is_err());
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(Black76::new(80.0, -0.01, 0.2).is_ok());
    }

    // ==========================================================
    // Precondition tests
    // ==========================================================

    #[test]
    fn test_price_rejects_zero_expiry() {
        let model = reference_model();
        let err = model.price(OptionKind::Call, 80.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            AnalyticalError::InvalidPricingInput {
                parameter: "expiry",
                value: 0.0,
            }
        );
    }

    #[test]
    fn test_price_rejects_negative_expiry() {
        let model = reference_model();
        assert!(model.price(OptionKind::Put, 80.0, -0.25).is_err());
    }

    #[test]
    fn test_price_rejects_non_positive_strike() {
        let model = reference_model();
        assert!(model.price(OptionKind::Call, 0.0, 0.25).is_err());
        assert!(model.price(OptionKind::Call, -80.0, 0.25).is_err());
    }

    #[test]
    fn test_price_never_nan_for_rejected_inputs() {
        // The precondition failures surface as errors, not NaN values.
        let model = reference_model();
        for (strike, expiry) in [(80.0, 0.0), (0.0, 0.25), (80.0, -1.0), (f64::NAN, 0.25)] {
            assert!(model.price(OptionKind::Call, strike, expiry).is_err());
        }
    }

    // ==========================================================
    // Price tests
    // ==========================================================

    #[test]
    fn test_atm_reference_value() {
        // F=K=80, T=0.25, r=0.05, σ=0.20:
        // C = P = e^(-0.0125)·80·(2Φ(0.05) - 1) ≈ 3.1506.
        let model = reference_model();
        let call = model.price(OptionKind::Call, 80.0, 0.25).unwrap();
        let put = model.price(OptionKind::Put, 80.0, 0.25).unwrap();
        assert_relative_eq!(call, 3.1506, epsilon = 1e-3);
        assert_relative_eq!(put, 3.1506, epsilon = 1e-3);
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = e^(-rT)·(F - K) within 1e-6.
        let model = reference_model();
        for strike in [60.0, 75.0, 80.0, 85.0, 100.0] {
            let call = model.price(OptionKind::Call, strike, 0.25).unwrap();
            let put = model.price(OptionKind::Put, strike, 0.25).unwrap();
            let forward_parity = (-0.05f64 * 0.25).exp() * (80.0 - strike);
            assert_relative_eq!(call - put, forward_parity, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_deep_itm_call_approaches_discounted_intrinsic() {
        let model = reference_model();
        let call = model.price(OptionKind::Call, 40.0, 0.25).unwrap();
        let discounted_intrinsic = (-0.05f64 * 0.25).exp() * (80.0 - 40.0);
        assert!(call >= discounted_intrinsic - 1e-6);
        assert!(call < discounted_intrinsic + 0.5);
    }

    #[test]
    fn test_deep_otm_call_small_positive() {
        // Far out of the money the value decays toward zero but stays
        // non-negative.
        let model = reference_model();
        let call = model.price(OptionKind::Call, 110.0, 0.25).unwrap();
        assert!(call > 0.0);
        assert!(call < 0.01);
    }

    #[test]
    fn test_call_decreasing_in_strike() {
        let model = reference_model();
        let mut last = f64::MAX;
        for strike in [60.0, 70.0, 80.0, 90.0, 100.0] {
            let call = model.price(OptionKind::Call, strike, 0.5).unwrap();
            assert!(call < last);
            last = call;
        }
    }

    #[test]
    fn test_longer_expiry_worth_more_atm() {
        let model = reference_model();
        let short = model.price(OptionKind::Call, 80.0, 0.25).unwrap();
        let long = model.price(OptionKind::Call, 80.0, 1.0).unwrap();
        assert!(long > short);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_prices_non_negative_and_finite(
                forward in 20.0f64..200.0,
                moneyness in 0.8f64..1.25,
                volatility in 0.15f64..0.5,
                expiry in 0.25f64..2.0,
            ) {
                let model = Black76::new(forward, 0.05, volatility).unwrap();
                let strike = forward * moneyness;
                for kind in [OptionKind::Call, OptionKind::Put] {
                    let price = model.price(kind, strike, expiry).unwrap();
                    prop_assert!(price.is_finite());
                    prop_assert!(price >= 0.0);
                }
            }

            #[test]
            fn test_parity_holds_everywhere(
                forward in 20.0f64..200.0,
                moneyness in 0.8f64..1.25,
                volatility in 0.15f64..0.5,
                expiry in 0.25f64..2.0,
                rate in -0.01f64..0.10,
            ) {
                let model = Black76::new(forward, rate, volatility).unwrap();
                let strike = forward * moneyness;
                let call = model.price(OptionKind::Call, strike, expiry).unwrap();
                let put = model.price(OptionKind::Put, strike, expiry).unwrap();
                let parity = (-rate * expiry).exp() * (forward - strike);
                prop_assert!((call - put - parity).abs() < 1e-6 * forward.max(1.0));
            }
        }
    }
}
