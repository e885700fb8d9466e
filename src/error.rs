//! Unified error types for the bonding-curve engine.
//!
//! Configuration problems are reported as [`ConfigError`] at construction or
//! calibration time; trade problems are reported as [`TradeError`] by the
//! market.  Both convert into the crate-level [`Error`].  Every failure is
//! deterministic: retrying the same call with the same inputs fails the
//! same way.

/// Invalid curve parameters, rejected before any curve is built.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A scalar parameter is outside its domain (non-finite, negative, …).
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Phase thresholds are not strictly increasing.
    #[error("phase thresholds must be strictly increasing")]
    UnorderedThresholds,

    /// Two successive thresholds coincide, leaving a zero-width segment.
    #[error("segment {index} has zero width")]
    DegenerateSegment {
        /// Index of the offending segment.
        index: usize,
    },

    /// The resulting price function decreases somewhere on `[0, 1]`.
    #[error("price decreases near progress {progress}")]
    NonMonotonic {
        /// First sampled progress at which the price dropped.
        progress: f64,
    },

    /// A calibration target cannot be met by any admissible parameter.
    #[error("infeasible calibration target: {0}")]
    Infeasible(&'static str),

    /// The calibration equation has a zero, negative or non-finite
    /// denominator.
    #[error("degenerate calibration: {0}")]
    DegenerateCalibration(&'static str),
}

/// Failures raised while quoting or executing a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TradeError {
    /// The requested amount is zero, negative or not finite.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The request cannot be satisfied against the current supply.
    #[error("infeasible trade: {0}")]
    Infeasible(&'static str),

    /// An iterative numeric routine hit its iteration bound.
    #[error("numeric routine did not converge: {0}")]
    NonConvergence(&'static str),

    /// A computed amount overflowed to infinity or NaN.
    #[error("non-finite result: {0}")]
    NonFinite(&'static str),
}

/// Crate-level error wrapping every failure kind.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// Curve or market configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Trade or numeric error.
    #[error(transparent)]
    Trade(#[from] TradeError),

    /// A progress value outside `[0, 1]` or not finite.
    #[error("progress must be finite and within [0, 1], got {0}")]
    InvalidProgress(f64),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
