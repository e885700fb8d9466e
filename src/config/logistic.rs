//! Configuration for logistic-blended curves.

use crate::domain::Progress;
use crate::error::ConfigError;

use super::check_total_supply;

/// Configuration for a logistic-blended symmetric curve.
///
/// ```text
/// t(x)     = (x − inflection) / transition_width
/// c(x)     = smoothing_left + (smoothing_right − smoothing_left) · σ(t(x))
/// price(x) = base_price + amplitude · ((x − inflection) / √(c(x) + (x − inflection)²) + 1)
/// ```
///
/// A large `smoothing_left` keeps the curve nearly flat before the
/// inflection; a small `smoothing_right` makes it steep after.  The
/// transition width controls how quickly one smoothing gives way to the
/// other.
///
/// # Validation
///
/// - `total_supply` finite and positive.
/// - `base_price` and `amplitude` finite and non-negative.
/// - Both smoothing coefficients finite and strictly positive.
/// - `transition_width` finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogisticBlendConfig {
    total_supply: f64,
    base_price: f64,
    amplitude: f64,
    inflection: Progress,
    smoothing_left: f64,
    smoothing_right: f64,
    transition_width: f64,
}

impl LogisticBlendConfig {
    /// Creates a new `LogisticBlendConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if any parameter is
    /// outside its domain.
    pub fn new(
        total_supply: f64,
        base_price: f64,
        amplitude: f64,
        inflection: Progress,
        smoothing_left: f64,
        smoothing_right: f64,
        transition_width: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            total_supply,
            base_price,
            amplitude,
            inflection,
            smoothing_left,
            smoothing_right,
            transition_width,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different amplitude.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `amplitude` is negative
    /// or not finite.
    pub fn with_amplitude(&self, amplitude: f64) -> Result<Self, ConfigError> {
        let config = Self {
            amplitude,
            ..self.clone()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] naming the first violated
    /// constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_total_supply(self.total_supply)?;
        if !self.base_price.is_finite() || self.base_price < 0.0 {
            return Err(ConfigError::InvalidParameter(
                "base price must be finite and non-negative",
            ));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(ConfigError::InvalidParameter(
                "amplitude must be finite and non-negative",
            ));
        }
        if !self.smoothing_left.is_finite() || self.smoothing_left <= 0.0 {
            return Err(ConfigError::InvalidParameter(
                "left smoothing must be finite and positive",
            ));
        }
        if !self.smoothing_right.is_finite() || self.smoothing_right <= 0.0 {
            return Err(ConfigError::InvalidParameter(
                "right smoothing must be finite and positive",
            ));
        }
        if !self.transition_width.is_finite() || self.transition_width <= 0.0 {
            return Err(ConfigError::InvalidParameter(
                "transition width must be finite and positive",
            ));
        }
        Ok(())
    }

    /// Returns the total token supply.
    #[must_use]
    pub const fn total_supply(&self) -> f64 {
        self.total_supply
    }

    /// Returns the price floor.
    #[must_use]
    pub const fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Returns the amplitude of the blended term.
    #[must_use]
    pub const fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Returns the inflection point.
    #[must_use]
    pub const fn inflection(&self) -> Progress {
        self.inflection
    }

    /// Returns the smoothing coefficient before the inflection.
    #[must_use]
    pub const fn smoothing_left(&self) -> f64 {
        self.smoothing_left
    }

    /// Returns the smoothing coefficient after the inflection.
    #[must_use]
    pub const fn smoothing_right(&self) -> f64 {
        self.smoothing_right
    }

    /// Returns the logistic transition width.
    #[must_use]
    pub const fn transition_width(&self) -> f64 {
        self.transition_width
    }
}
