//! Threshold power-law curve.
//!
//! The price is flat until a progress threshold `b`, then rises as a power
//! of the distance past it:
//!
//! ```text
//! price(x) = P0                       for x ≤ b
//! price(x) = P0 + a · (x − b)^k       for x > b,  k > 1
//! ```
//!
//! # Closed Form
//!
//! The antiderivative is analytic, so the integrator never falls back to
//! quadrature for this curve:
//!
//! ```text
//! F(x) = P0 · x + a / (k + 1) · max(0, x − b)^(k + 1)
//! ```

use crate::config::ThresholdPowerLawConfig;
use crate::domain::Progress;
use crate::error::ConfigError;
use crate::traits::{CurveShape, FromConfig};

use super::ensure_monotonic;

/// A flat-then-power-law bonding curve.
///
/// # Example
///
/// ```rust
/// use bonding_curve::config::ThresholdPowerLawConfig;
/// use bonding_curve::curves::ThresholdPowerLawCurve;
/// use bonding_curve::domain::Progress;
/// use bonding_curve::traits::{CurveShape, FromConfig};
///
/// let threshold = Progress::from_tokens(4.83e9, 7e9).expect("ok");
/// let cfg = ThresholdPowerLawConfig::calibrated(7e9, 1e-9, threshold, 4.5, 84.0)
///     .expect("feasible target");
/// let curve = ThresholdPowerLawCurve::from_config(&cfg).expect("monotone");
///
/// assert_eq!(curve.price(Progress::ZERO), 1e-9);
/// assert!(curve.price(Progress::ONE) > 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdPowerLawCurve {
    total_supply: f64,
    base_price: f64,
    threshold: f64,
    exponent: f64,
    amplitude: f64,
}

impl ThresholdPowerLawCurve {
    /// Returns the flat price below the threshold.
    #[must_use]
    pub const fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Returns the threshold progress.
    #[must_use]
    pub fn threshold(&self) -> Progress {
        Progress::saturating(self.threshold)
    }

    /// Returns the exponent `k`.
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns the amplitude `a`.
    #[must_use]
    pub const fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Area of the rising leg over `[0, x]`: `a / (k + 1) · max(0, x − b)^(k + 1)`.
    fn rise_area(&self, x: f64) -> f64 {
        let past = x - self.threshold;
        if past <= 0.0 {
            return 0.0;
        }
        self.amplitude / (self.exponent + 1.0) * past.powf(self.exponent + 1.0)
    }
}

impl FromConfig<ThresholdPowerLawConfig> for ThresholdPowerLawCurve {
    /// Creates a power-law curve from its configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidParameter`] if the config is invalid.
    /// - [`ConfigError::NonMonotonic`] if the sampled price decreases.
    fn from_config(config: &ThresholdPowerLawConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let curve = Self {
            total_supply: config.total_supply(),
            base_price: config.base_price(),
            threshold: config.threshold().get(),
            exponent: config.exponent(),
            amplitude: config.amplitude(),
        };
        ensure_monotonic(&curve)?;
        Ok(curve)
    }
}

impl CurveShape for ThresholdPowerLawCurve {
    fn price(&self, progress: Progress) -> f64 {
        let past = progress.get() - self.threshold;
        if past <= 0.0 {
            return self.base_price;
        }
        self.base_price + self.amplitude * past.powf(self.exponent)
    }

    fn total_supply(&self) -> f64 {
        self.total_supply
    }

    fn closed_form_integral(&self, from: Progress, to: Progress) -> Option<f64> {
        let (a, b) = (from.get(), to.get());
        Some(self.base_price * (b - a) + (self.rise_area(b) - self.rise_area(a)))
    }
}
