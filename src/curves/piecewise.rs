//! Multi-phase piecewise-exponential curve.
//!
//! The curve is a chain of exponential segments.  Each segment starts at
//! the price the previous one ended at and grows geometrically to its
//! configured end price:
//!
//! ```text
//! r        = (end_price / start_price)^(1 / (end − start))
//! price(x) = start_price · r^(x − start)           start < x ≤ end
//! ```
//!
//! Phase one is segment `0`: flat (`r = 1`) or an exponential rise to the
//! first breakpoint's price.  Past the last breakpoint the terminal price
//! holds constant.
//!
//! # Boundary Semantics
//!
//! A progress value exactly on a threshold belongs to the segment that
//! ends there.  Segments are located by binary search over their ends.
//!
//! # Closed Form
//!
//! Per segment, with `L = ln r`:
//!
//! ```text
//! ∫[xa, xb] p·e^(L(x − s)) dx = p/L · e^(L(xa − s)) · (e^(L(xb − xa)) − 1)
//! ```
//!
//! evaluated with `exp_m1` for accuracy on narrow intervals, falling back
//! to `p · (xb − xa)` when `r == 1`.

use crate::config::{PhaseOneShape, PiecewiseExponentialConfig};
use crate::domain::Progress;
use crate::error::ConfigError;
use crate::traits::{CurveShape, FromConfig};

use super::ensure_monotonic;

/// Below this `|ln r|` a segment is treated as constant-price.
const FLAT_LOG_RATIO: f64 = 1e-12;

/// One exponential piece of the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    start: f64,
    end: f64,
    start_price: f64,
    log_ratio: f64,
}

impl Segment {
    fn new(start: f64, end: f64, start_price: f64, end_price: f64) -> Self {
        Self {
            start,
            end,
            start_price,
            log_ratio: (end_price / start_price).ln() / (end - start),
        }
    }

    fn flat(start: f64, end: f64, price: f64) -> Self {
        Self {
            start,
            end,
            start_price: price,
            log_ratio: 0.0,
        }
    }

    fn price_at(&self, x: f64) -> f64 {
        self.start_price * (self.log_ratio * (x - self.start)).exp()
    }

    /// Area under the segment over `[xa, xb] ⊆ [start, end]`.
    fn area(&self, xa: f64, xb: f64) -> f64 {
        let width = xb - xa;
        if self.log_ratio.abs() < FLAT_LOG_RATIO {
            return self.price_at(xa) * width;
        }
        self.price_at(xa) / self.log_ratio * (self.log_ratio * width).exp_m1()
    }
}

/// A multi-phase piecewise-exponential bonding curve.
///
/// # Example
///
/// ```rust
/// use bonding_curve::config::{Breakpoint, PhaseOneShape, PiecewiseExponentialConfig};
/// use bonding_curve::curves::PiecewiseExponentialCurve;
/// use bonding_curve::domain::Progress;
/// use bonding_curve::traits::{CurveShape, FromConfig};
///
/// let cfg = PiecewiseExponentialConfig::new(
///     7.9e9,
///     Progress::from_percent(69.0).expect("ok"),
///     1e-8,
///     PhaseOneShape::Flat,
///     vec![
///         Breakpoint::at_percent(70.0, 7.7e-8).expect("ok"),
///         Breakpoint::at_percent(100.0, 2.33e-7).expect("ok"),
///     ],
/// )
/// .expect("valid config");
/// let curve = PiecewiseExponentialCurve::from_config(&cfg).expect("monotone");
///
/// let mid = curve.price(Progress::from_percent(69.5).expect("ok"));
/// assert!(mid > 1e-8 && mid < 7.7e-8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseExponentialCurve {
    total_supply: f64,
    segments: Vec<Segment>,
}

impl PiecewiseExponentialCurve {
    /// Returns the number of segments, including phase one and the
    /// constant tail when present.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the segment boundaries in ascending order, starting at zero
    /// and ending at one.
    #[must_use]
    pub fn boundaries(&self) -> Vec<Progress> {
        let mut out = Vec::with_capacity(self.segments.len() + 1);
        out.push(Progress::ZERO);
        out.extend(self.segments.iter().map(|s| Progress::saturating(s.end)));
        out
    }

    fn locate(&self, x: f64) -> Option<&Segment> {
        let idx = self.segments.partition_point(|s| s.end < x);
        self.segments.get(idx).or_else(|| self.segments.last())
    }
}

impl FromConfig<PiecewiseExponentialConfig> for PiecewiseExponentialCurve {
    /// Builds the segment chain from its configuration.
    ///
    /// # Errors
    ///
    /// - Any error from [`PiecewiseExponentialConfig::validate`].
    /// - [`ConfigError::NonMonotonic`] if the sampled price decreases.
    fn from_config(config: &PiecewiseExponentialConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let breakpoints = config.breakpoints();
        let Some(first) = breakpoints.first() else {
            return Err(ConfigError::InvalidParameter(
                "at least one breakpoint is required",
            ));
        };

        let phase_one_end = config.phase_one_end().get();
        let phase_one_price = config.phase_one_price();
        let mut segments = Vec::with_capacity(breakpoints.len() + 2);

        let mut prev_price = match config.phase_one_shape() {
            PhaseOneShape::Flat => {
                segments.push(Segment::flat(0.0, phase_one_end, phase_one_price));
                phase_one_price
            }
            PhaseOneShape::Exponential => {
                segments.push(Segment::new(
                    0.0,
                    phase_one_end,
                    phase_one_price,
                    first.price(),
                ));
                first.price()
            }
        };
        let mut prev_end = phase_one_end;

        for bp in breakpoints {
            let end = bp.progress().get();
            segments.push(Segment::new(prev_end, end, prev_price, bp.price()));
            prev_end = end;
            prev_price = bp.price();
        }

        if prev_end < 1.0 {
            segments.push(Segment::flat(prev_end, 1.0, prev_price));
        }

        let curve = Self {
            total_supply: config.total_supply(),
            segments,
        };
        ensure_monotonic(&curve)?;
        Ok(curve)
    }
}

impl CurveShape for PiecewiseExponentialCurve {
    fn price(&self, progress: Progress) -> f64 {
        let x = progress.get();
        self.locate(x).map_or(0.0, |segment| segment.price_at(x))
    }

    fn total_supply(&self) -> f64 {
        self.total_supply
    }

    fn closed_form_integral(&self, from: Progress, to: Progress) -> Option<f64> {
        let (a, b) = (from.get(), to.get());
        let total = self
            .segments
            .iter()
            .filter(|s| s.end > a && s.start < b)
            .map(|s| s.area(a.max(s.start), b.min(s.end)))
            .sum();
        Some(total)
    }
}
