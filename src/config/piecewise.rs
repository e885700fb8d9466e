//! Configuration for multi-phase piecewise-exponential curves.

use crate::domain::Progress;
use crate::error::ConfigError;

use super::check_total_supply;

/// How the price behaves during phase one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseOneShape {
    /// Constant at the phase-one price.
    #[default]
    Flat,
    /// Exponential rise from the phase-one price at zero progress to the
    /// first breakpoint's price at the end of phase one.
    Exponential,
}

/// End of a phase-two segment: the progress where it ends and the price
/// the curve reaches there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    progress: Progress,
    price: f64,
}

impl Breakpoint {
    /// Creates a breakpoint.
    #[must_use]
    pub const fn new(progress: Progress, price: f64) -> Self {
        Self { progress, price }
    }

    /// Creates a breakpoint from a percentage of total supply.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `percent` is outside
    /// `[0, 100]`.
    pub fn at_percent(percent: f64, price: f64) -> Result<Self, ConfigError> {
        let progress = Progress::from_percent(percent)
            .map_err(|_| ConfigError::InvalidParameter("breakpoint percent must be in [0, 100]"))?;
        Ok(Self::new(progress, price))
    }

    /// Progress at the right edge of the segment.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Price at the right edge of the segment.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }
}

/// Configuration for a multi-phase piecewise-exponential curve.
///
/// Phase one covers `[0, phase_one_end]`.  Each breakpoint then closes an
/// exponential segment that starts where the previous one ended:
///
/// ```text
/// r        = (end_price / start_price)^(1 / (end − start))
/// price(x) = start_price · r^(x − start)
/// ```
///
/// Past the last breakpoint the last price holds constant.
///
/// # Validation
///
/// - `total_supply` finite and positive.
/// - `phase_one_end` strictly inside `(0, 1)`.
/// - `phase_one_price` finite and positive.
/// - At least one breakpoint.
/// - Breakpoint progress strictly increasing and after `phase_one_end`;
///   a repeated value is a zero-width segment.
/// - Breakpoint prices finite, positive and never below the price the
///   previous segment ends at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PiecewiseExponentialConfig {
    total_supply: f64,
    phase_one_end: Progress,
    phase_one_price: f64,
    phase_one_shape: PhaseOneShape,
    breakpoints: Vec<Breakpoint>,
}

impl PiecewiseExponentialConfig {
    /// Creates a new `PiecewiseExponentialConfig`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidParameter`] for out-of-domain scalars or an
    ///   empty breakpoint list.
    /// - [`ConfigError::UnorderedThresholds`] if breakpoints go backwards.
    /// - [`ConfigError::DegenerateSegment`] if two thresholds coincide.
    /// - [`ConfigError::NonMonotonic`] if a breakpoint price drops.
    pub fn new(
        total_supply: f64,
        phase_one_end: Progress,
        phase_one_price: f64,
        phase_one_shape: PhaseOneShape,
        breakpoints: Vec<Breakpoint>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            total_supply,
            phase_one_end,
            phase_one_price,
            phase_one_shape,
            breakpoints,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Segment indices in errors count phase one as segment `0`.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_total_supply(self.total_supply)?;
        if self.phase_one_end <= Progress::ZERO || self.phase_one_end >= Progress::ONE {
            return Err(ConfigError::InvalidParameter(
                "phase one must end strictly inside (0, 1)",
            ));
        }
        if !self.phase_one_price.is_finite() || self.phase_one_price <= 0.0 {
            return Err(ConfigError::InvalidParameter(
                "phase one price must be finite and positive",
            ));
        }
        if self.breakpoints.is_empty() {
            return Err(ConfigError::InvalidParameter(
                "at least one breakpoint is required",
            ));
        }

        let mut prev_end = self.phase_one_end;
        let mut prev_price = self.phase_one_price;
        for (i, bp) in self.breakpoints.iter().enumerate() {
            if bp.progress < prev_end {
                return Err(ConfigError::UnorderedThresholds);
            }
            if bp.progress == prev_end {
                return Err(ConfigError::DegenerateSegment { index: i + 1 });
            }
            if !bp.price.is_finite() || bp.price <= 0.0 {
                return Err(ConfigError::InvalidParameter(
                    "breakpoint price must be finite and positive",
                ));
            }
            if bp.price < prev_price {
                return Err(ConfigError::NonMonotonic {
                    progress: bp.progress.get(),
                });
            }
            prev_end = bp.progress;
            prev_price = bp.price;
        }
        Ok(())
    }

    /// Returns the total token supply.
    #[must_use]
    pub const fn total_supply(&self) -> f64 {
        self.total_supply
    }

    /// Returns the progress at which phase one ends.
    #[must_use]
    pub const fn phase_one_end(&self) -> Progress {
        self.phase_one_end
    }

    /// Returns the phase-one price (the starting price of the curve).
    #[must_use]
    pub const fn phase_one_price(&self) -> f64 {
        self.phase_one_price
    }

    /// Returns the phase-one shape.
    #[must_use]
    pub const fn phase_one_shape(&self) -> PhaseOneShape {
        self.phase_one_shape
    }

    /// Returns the phase-two breakpoints in ascending order.
    #[must_use]
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }
}
