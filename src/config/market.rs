//! Numeric and policy tunables for markets and integration.

use crate::domain::{TokenScale, TradePolicy};
use crate::error::ConfigError;

/// Step-doubling midpoint quadrature settings.
///
/// The integrator starts with `initial_steps` midpoint subintervals and
/// doubles them each level, extrapolating across levels, until two
/// consecutive estimates agree within `relative_tolerance`.  At least
/// `min_levels` and at most `max_levels` doublings are performed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadratureConfig {
    /// Subintervals at level zero.
    pub initial_steps: u32,
    /// Relative agreement required between consecutive estimates.
    pub relative_tolerance: f64,
    /// Doublings performed before convergence is tested.
    pub min_levels: u32,
    /// Doublings after which the integrator gives up.
    pub max_levels: u32,
}

impl QuadratureConfig {
    /// Hard cap on `max_levels`; `initial_steps · 2^max_levels` must stay
    /// a sane number of evaluations.
    pub const LEVEL_CAP: u32 = 24;

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if the step count is zero,
    /// the tolerance is not a positive finite number, or the level bounds
    /// are inverted or above [`Self::LEVEL_CAP`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_steps == 0 {
            return Err(ConfigError::InvalidParameter(
                "initial quadrature steps must be positive",
            ));
        }
        if !self.relative_tolerance.is_finite() || self.relative_tolerance <= 0.0 {
            return Err(ConfigError::InvalidParameter(
                "quadrature tolerance must be finite and positive",
            ));
        }
        if self.min_levels > self.max_levels || self.max_levels > Self::LEVEL_CAP {
            return Err(ConfigError::InvalidParameter(
                "quadrature level bounds are inconsistent",
            ));
        }
        Ok(())
    }
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            initial_steps: 8,
            relative_tolerance: 1e-9,
            min_levels: 3,
            max_levels: 18,
        }
    }
}

/// Market behaviour: oversize policy, integration settings and token
/// granularity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarketConfig {
    /// What to do with requests larger than the market can fill.
    pub policy: TradePolicy,
    /// Quadrature settings for curves without a closed-form integral.
    pub quadrature: QuadratureConfig,
    /// Fractional digits of the token.  Trade amounts are rounded to the
    /// nearest `10^-token_decimals` token and budget inversion resolves to
    /// one such unit.
    pub token_decimals: u32,
    /// Upper bound on bisection rounds.
    pub max_bisection_iterations: u32,
}

impl MarketConfig {
    /// Returns a copy using the given oversize policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: TradePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] for more than
    /// [`TokenScale::MAX_DECIMALS`] decimals, a zero iteration bound, or
    /// invalid quadrature settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.quadrature.validate()?;
        TokenScale::new(self.token_decimals)?;
        if self.max_bisection_iterations == 0 {
            return Err(ConfigError::InvalidParameter(
                "bisection needs at least one iteration",
            ));
        }
        Ok(())
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            policy: TradePolicy::Clamp,
            quadrature: QuadratureConfig::default(),
            token_decimals: 6,
            max_bisection_iterations: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(MarketConfig::default().validate().is_ok());
        assert!(QuadratureConfig::default().validate().is_ok());
    }

    #[test]
    fn with_policy() {
        let cfg = MarketConfig::default().with_policy(TradePolicy::Reject);
        assert_eq!(cfg.policy, TradePolicy::Reject);
    }

    #[test]
    fn zero_steps_rejected() {
        let cfg = QuadratureConfig {
            initial_steps: 0,
            ..QuadratureConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_levels_rejected() {
        let cfg = QuadratureConfig {
            min_levels: 10,
            max_levels: 4,
            ..QuadratureConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn level_cap_enforced() {
        let cfg = QuadratureConfig {
            max_levels: QuadratureConfig::LEVEL_CAP + 1,
            ..QuadratureConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn too_many_decimals_rejected() {
        let cfg = MarketConfig {
            token_decimals: TokenScale::MAX_DECIMALS + 1,
            ..MarketConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn default_tolerance_is_nine_digits() {
        assert_eq!(QuadratureConfig::default().relative_tolerance, 1e-9);
    }

    #[test]
    fn zero_iterations_rejected() {
        let cfg = MarketConfig {
            max_bisection_iterations: 0,
            ..MarketConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
