//! Market parameter configuration.
//!
//! Market assumptions default to `MarketParams::default()` (5% rate,
//! 20% volatility) and can be overridden by a TOML file:
//!
//! ```toml
//! risk_free_rate = 0.045
//! volatility = 0.35
//! ```

use pricer_pricing::MarketParams;

use crate::error::Result;

/// Loads market parameters, layering an optional TOML file over the
/// documented defaults.
///
/// A path that does not exist is an error; omitting the path entirely
/// uses the defaults.
pub fn load_market_params(path: Option<&str>) -> Result<MarketParams> {
    let defaults = MarketParams::default();

    let mut builder = config::Config::builder()
        .set_default("risk_free_rate", defaults.risk_free_rate)?
        .set_default("volatility", defaults.volatility)?;

    if let Some(path) = path {
        builder = builder.add_source(config::File::with_name(path).required(true));
    }

    let params = builder.build()?.try_deserialize::<MarketParams>()?;
    Ok(params)
}
