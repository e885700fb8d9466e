//! Logistic-blended symmetric curve.
//!
//! ```text
//! t(x)     = (x − b) / max(w, 1e-9)
//! c(x)     = cL + (cR − cL) · σ(t(x)),   σ(t) = 1 / (1 + e^(−t))
//! price(x) = P0 + a · ((x − b) / √(c(x) + (x − b)²) + 1)
//! ```
//!
//! The term `(x − b) / √(c + (x − b)²)` is an odd sigmoid bounded by
//! `(−1, 1)`, so the price stays within `(P0, P0 + 2a)`.  Blending the
//! smoothing coefficient with a logistic keeps the curve differentiable
//! through the transition while letting each side have its own
//! steepness.
//!
//! There is no closed-form antiderivative; the integrator uses quadrature.
//! The curve hands it a geometric ladder of split points around `b`,
//! spaced `s, 2s, 4s, …` on both sides where `s` is the narrowest of the
//! transition width and the two `√c` scales, so every piece is smooth
//! relative to its own length.

use crate::config::LogisticBlendConfig;
use crate::domain::Progress;
use crate::error::ConfigError;
use crate::traits::{CurveShape, FromConfig};

use super::ensure_monotonic;

/// Smallest transition width used at evaluation time.
pub const MIN_TRANSITION_WIDTH: f64 = 1e-9;

/// A logistic-blended bonding curve: nearly flat before the inflection,
/// steep after it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticBlendCurve {
    total_supply: f64,
    base_price: f64,
    amplitude: f64,
    inflection: f64,
    smoothing_left: f64,
    smoothing_right: f64,
    transition_width: f64,
    breakpoints: Vec<Progress>,
}

impl LogisticBlendCurve {
    /// Returns the price floor `P0`.
    #[must_use]
    pub const fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Returns the amplitude `a`.
    #[must_use]
    pub const fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Returns the inflection point `b`.
    #[must_use]
    pub fn inflection(&self) -> Progress {
        Progress::saturating(self.inflection)
    }

    /// Returns the blended smoothing coefficient `c(x)`.
    #[must_use]
    pub fn smoothing_at(&self, progress: Progress) -> f64 {
        let t = (progress.get() - self.inflection) / self.transition_width;
        let blend = logistic(t);
        self.smoothing_left + (self.smoothing_right - self.smoothing_left) * blend
    }

    /// The amplitude-free shape `g(x) = (x − b) / √(c(x) + (x − b)²) + 1`,
    /// so that `price = P0 + a · g`.
    fn unit_shape(&self, progress: Progress) -> f64 {
        let dx = progress.get() - self.inflection;
        let c = self.smoothing_at(progress);
        dx / (c + dx * dx).sqrt() + 1.0
    }

    /// Split points at `b ± s·2^k` inside `(0, 1)`, plus `b` itself.
    fn ladder(&self) -> Vec<Progress> {
        let scale = self
            .transition_width
            .min(self.smoothing_left.sqrt())
            .min(self.smoothing_right.sqrt())
            .max(MIN_TRANSITION_WIDTH);
        let b = self.inflection;
        let mut points = vec![b];
        let mut offset = scale;
        while offset < 1.0 {
            points.push(b - offset);
            points.push(b + offset);
            offset *= 2.0;
        }
        points.retain(|x| *x > 0.0 && *x < 1.0);
        points.sort_by(f64::total_cmp);
        points.into_iter().map(Progress::saturating).collect()
    }
}

fn logistic(t: f64) -> f64 {
    1.0 / (1.0 + (-t).exp())
}

impl FromConfig<LogisticBlendConfig> for LogisticBlendCurve {
    /// Creates a logistic-blended curve from its configuration.
    ///
    /// The transition width is clamped to at least
    /// [`MIN_TRANSITION_WIDTH`], and the quadrature split points are
    /// computed once here.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidParameter`] if the config is invalid.
    /// - [`ConfigError::NonMonotonic`] if the sampled price decreases.
    fn from_config(config: &LogisticBlendConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut curve = Self {
            total_supply: config.total_supply(),
            base_price: config.base_price(),
            amplitude: config.amplitude(),
            inflection: config.inflection().get(),
            smoothing_left: config.smoothing_left(),
            smoothing_right: config.smoothing_right(),
            transition_width: config.transition_width().max(MIN_TRANSITION_WIDTH),
            breakpoints: Vec::new(),
        };
        curve.breakpoints = curve.ladder();
        ensure_monotonic(&curve)?;
        Ok(curve)
    }
}

impl CurveShape for LogisticBlendCurve {
    fn price(&self, progress: Progress) -> f64 {
        self.base_price + self.amplitude * self.unit_shape(progress)
    }

    fn total_supply(&self) -> f64 {
        self.total_supply
    }

    fn breakpoints(&self) -> &[Progress] {
        &self.breakpoints
    }
}
