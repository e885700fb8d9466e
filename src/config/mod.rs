//! Curve and market configuration.
//!
//! This module contains the [`CurveConfig`] enum, the top-level
//! declarative blueprint for any curve, along with the per-family
//! parameter structs and the market tunables.  Every struct validates its
//! invariants on construction; deserialised values are re-validated by
//! the factory.

mod curve_config;
mod logistic;
mod market;
mod piecewise;
mod power_law;

pub use curve_config::CurveConfig;
pub use logistic::LogisticBlendConfig;
pub use market::{MarketConfig, QuadratureConfig};
pub use piecewise::{Breakpoint, PhaseOneShape, PiecewiseExponentialConfig};
pub use power_law::ThresholdPowerLawConfig;

use crate::error::ConfigError;

pub(crate) fn check_total_supply(total_supply: f64) -> Result<(), ConfigError> {
    if !total_supply.is_finite() || total_supply <= 0.0 {
        return Err(ConfigError::InvalidParameter(
            "total supply must be finite and positive",
        ));
    }
    Ok(())
}
