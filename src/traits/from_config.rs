//! Generic construction trait for building a curve from its configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating curve
//! instances from their configuration structs.  Each curve type
//! implements `FromConfig<C>` for its own config, enabling the factory to
//! dispatch construction without `dyn` trait objects.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration and then verify
//! the monotonicity invariant on the constructed curve.  A successfully
//! constructed curve is guaranteed to have a non-negative, non-decreasing
//! price on `[0, 1]`.
//!
//! ```text
//! CurveConfig::PowerLaw(cfg)  => ThresholdPowerLawCurve::from_config(&cfg)
//! CurveConfig::Logistic(cfg)  => LogisticBlendCurve::from_config(&cfg)
//! CurveConfig::Piecewise(cfg) => PiecewiseExponentialCurve::from_config(&cfg)
//! ```

use crate::error::ConfigError;

/// Builds a curve from a configuration with full validation.
///
/// # Type Parameters
///
/// - `C`: the configuration type describing the curve's immutable
///   parameters.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration is invalid or the
/// resulting price function is not monotone.
pub trait FromConfig<C> {
    /// Creates a new curve from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidParameter`] for out-of-range parameters.
    /// - [`ConfigError::NonMonotonic`] if the price decreases anywhere.
    fn from_config(config: &C) -> Result<Self, ConfigError>
    where
        Self: Sized;
}
