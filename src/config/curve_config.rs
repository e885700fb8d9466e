//! Top-level curve configuration enum.
//!
//! [`CurveConfig`] is the declarative blueprint for any curve.  The
//! factory matches on it to dispatch construction:
//!
//! ```text
//! match config {
//!     CurveConfig::PowerLaw(cfg)  => ThresholdPowerLawCurve::from_config(cfg),
//!     CurveConfig::Logistic(cfg)  => LogisticBlendCurve::from_config(cfg),
//!     CurveConfig::Piecewise(cfg) => PiecewiseExponentialCurve::from_config(cfg),
//! }
//! ```

use super::{LogisticBlendConfig, PiecewiseExponentialConfig, ThresholdPowerLawConfig};
use crate::error::ConfigError;

/// Configuration enum covering every curve family.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CurveConfig {
    /// Flat then power-law rise.
    PowerLaw(ThresholdPowerLawConfig),
    /// Logistic-blended symmetric curve.
    Logistic(LogisticBlendConfig),
    /// Multi-phase piecewise-exponential curve.
    Piecewise(PiecewiseExponentialConfig),
}

impl CurveConfig {
    /// Validates the inner configuration.
    ///
    /// # Errors
    ///
    /// Returns the same [`ConfigError`] the inner config's `validate()`
    /// would return.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::PowerLaw(cfg) => cfg.validate(),
            Self::Logistic(cfg) => cfg.validate(),
            Self::Piecewise(cfg) => cfg.validate(),
        }
    }

    /// Returns the total token supply of the inner configuration.
    #[must_use]
    pub fn total_supply(&self) -> f64 {
        match self {
            Self::PowerLaw(cfg) => cfg.total_supply(),
            Self::Logistic(cfg) => cfg.total_supply(),
            Self::Piecewise(cfg) => cfg.total_supply(),
        }
    }
}

impl core::fmt::Display for CurveConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PowerLaw(_) => write!(f, "PowerLaw"),
            Self::Logistic(_) => write!(f, "Logistic"),
            Self::Piecewise(_) => write!(f, "Piecewise"),
        }
    }
}

impl From<ThresholdPowerLawConfig> for CurveConfig {
    fn from(cfg: ThresholdPowerLawConfig) -> Self {
        Self::PowerLaw(cfg)
    }
}

impl From<LogisticBlendConfig> for CurveConfig {
    fn from(cfg: LogisticBlendConfig) -> Self {
        Self::Logistic(cfg)
    }
}

impl From<PiecewiseExponentialConfig> for CurveConfig {
    fn from(cfg: PiecewiseExponentialConfig) -> Self {
        Self::Piecewise(cfg)
    }
}
