//! Configuration for threshold power-law curves.

use crate::domain::Progress;
use crate::error::ConfigError;

use super::check_total_supply;

/// Configuration for a threshold power-law curve.
///
/// The price is flat at `base_price` up to `threshold`, then rises as
///
/// ```text
/// price(x) = base_price + amplitude · (x − threshold)^exponent
/// ```
///
/// # Validation
///
/// - `total_supply` finite and positive.
/// - `base_price` and `amplitude` finite and non-negative.
/// - `threshold < 1` so the rising leg has non-zero width.
/// - `exponent` finite and strictly greater than one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdPowerLawConfig {
    total_supply: f64,
    base_price: f64,
    threshold: Progress,
    exponent: f64,
    amplitude: f64,
}

impl ThresholdPowerLawConfig {
    /// Creates a new `ThresholdPowerLawConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if any parameter is
    /// outside its domain.
    pub fn new(
        total_supply: f64,
        base_price: f64,
        threshold: Progress,
        exponent: f64,
        amplitude: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            total_supply,
            base_price,
            threshold,
            exponent,
            amplitude,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds the normalised-rise variant
    /// `price(x) = base_price · (1 + ((x − threshold) / (1 − threshold))^exponent)`,
    /// which doubles the base price at full sale.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn normalized_rise(
        total_supply: f64,
        base_price: f64,
        threshold: Progress,
        exponent: f64,
    ) -> Result<Self, ConfigError> {
        let width = 1.0 - threshold.get();
        if width <= 0.0 {
            return Err(ConfigError::InvalidParameter("threshold must be below 1"));
        }
        let amplitude = base_price / width.powf(exponent);
        Self::new(total_supply, base_price, threshold, exponent, amplitude)
    }

    /// Builds a config whose amplitude is solved so that selling the whole
    /// supply raises exactly `target_raise`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Infeasible`] if `target_raise` is below the floor
    ///   revenue `base_price · total_supply`.
    /// - [`ConfigError::DegenerateCalibration`] if the rising leg has no
    ///   area.
    /// - [`ConfigError::InvalidParameter`] for out-of-domain inputs.
    pub fn calibrated(
        total_supply: f64,
        base_price: f64,
        threshold: Progress,
        exponent: f64,
        target_raise: f64,
    ) -> Result<Self, ConfigError> {
        let amplitude = crate::calibration::power_law_amplitude(
            total_supply,
            base_price,
            threshold,
            exponent,
            target_raise,
        )?;
        Self::new(total_supply, base_price, threshold, exponent, amplitude)
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
        if self.threshold >= Progress::ONE {
            return Err(ConfigError::InvalidParameter("threshold must be below 1"));
        }
        if !self.exponent.is_finite() || self.exponent <= 1.0 {
            return Err(ConfigError::InvalidParameter(
                "exponent must be finite and greater than 1",
            ));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(ConfigError::InvalidParameter(
                "amplitude must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Returns the total token supply.
    #[must_use]
    pub const fn total_supply(&self) -> f64 {
        self.total_supply
    }

    /// Returns the flat price below the threshold.
    #[must_use]
    pub const fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Returns the progress at which the price starts rising.
    #[must_use]
    pub const fn threshold(&self) -> Progress {
        self.threshold
    }

    /// Returns the power-law exponent.
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns the amplitude of the rising leg.
    #[must_use]
    pub const fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn threshold() -> Progress {
        let Ok(p) = Progress::new(0.69) else {
            panic!("valid progress");
        };
        p
    }

    #[test]
    fn valid_config() {
        let result = ThresholdPowerLawConfig::new(7e9, 1e-9, threshold(), 4.5, 3.8e-5);
        assert!(result.is_ok());
    }

    #[test]
    fn zero_supply_rejected() {
        let result = ThresholdPowerLawConfig::new(0.0, 1e-9, threshold(), 4.5, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn negative_base_price_rejected() {
        let result = ThresholdPowerLawConfig::new(7e9, -1e-9, threshold(), 4.5, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn exponent_one_rejected() {
        let result = ThresholdPowerLawConfig::new(7e9, 1e-9, threshold(), 1.0, 1.0);
        assert_eq!(
            result,
            Err(ConfigError::InvalidParameter(
                "exponent must be finite and greater than 1"
            ))
        );
    }

    #[test]
    fn threshold_at_one_rejected() {
        let result = ThresholdPowerLawConfig::new(7e9, 1e-9, Progress::ONE, 2.0, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn negative_amplitude_rejected() {
        let result = ThresholdPowerLawConfig::new(7e9, 1e-9, threshold(), 2.0, -1.0);
        assert!(result.is_err());
    }

    #[test]
    fn normalized_rise_amplitude() {
        let Ok(b) = Progress::new(0.7) else {
            panic!("valid progress");
        };
        let Ok(cfg) = ThresholdPowerLawConfig::normalized_rise(7.75e9, 1e-8, b, 15.0) else {
            panic!("expected Ok");
        };
        // amplitude · 0.3^15 == base price
        let top = cfg.amplitude() * 0.3_f64.powf(15.0);
        assert!((top - 1e-8).abs() / 1e-8 < 1e-12);
    }

    #[test]
    fn calibrated_rejects_low_target() {
        let result = ThresholdPowerLawConfig::calibrated(7e9, 1e-9, threshold(), 4.5, 1.0);
        assert!(matches!(result, Err(ConfigError::Infeasible(_))));
    }

    #[test]
    fn accessors() {
        let Ok(cfg) = ThresholdPowerLawConfig::new(100.0, 0.5, threshold(), 3.0, 2.0) else {
            panic!("expected Ok");
        };
        assert!((cfg.total_supply() - 100.0).abs() < f64::EPSILON);
        assert!((cfg.base_price() - 0.5).abs() < f64::EPSILON);
        assert_eq!(cfg.threshold(), threshold());
        assert!((cfg.exponent() - 3.0).abs() < f64::EPSILON);
        assert!((cfg.amplitude() - 2.0).abs() < f64::EPSILON);
    }
}
