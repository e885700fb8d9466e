//! The single pricing capability every curve implements.
//!
//! [`CurveShape`] maps normalized progress to a unit price.  Everything
//! else in the engine (integration, quoting, budget inversion,
//! calibration) is written once against this trait, so adding a curve
//! family never duplicates market logic.
//!
//! # Purity
//!
//! Implementations must be pure: the same progress always yields the same
//! price, with no hidden state and no dependence on call order.
//!
//! # Dispatch Model
//!
//! Built-in curves are dispatched through the `CurveBox` enum (not `dyn`
//! trait objects); custom curves can implement the trait directly and be
//! used with the generic market.

use crate::domain::{CurvePoint, Progress};

/// A monotone price-versus-progress function.
///
/// # Implementors
///
/// - `ThresholdPowerLawCurve`: flat floor, then `(x − b)^k` rise
/// - `LogisticBlendCurve`: logistic-blended symmetric curve
/// - `PiecewiseExponentialCurve`: multi-phase exponential segments
/// - `CurveBox`: enum dispatch over all of the above
pub trait CurveShape {
    /// Returns the unit price at `progress`.
    ///
    /// The result is finite and non-negative, and non-decreasing in
    /// `progress`, for every curve that passed construction.
    fn price(&self, progress: Progress) -> f64;

    /// Returns the total token supply the curve is defined over.
    fn total_supply(&self) -> f64;

    /// Returns `∫ price(x) dx` over `[from, to]` in normalized progress,
    /// when the curve has an analytic antiderivative.
    ///
    /// Callers guarantee `from <= to`.  The result is NOT scaled by the
    /// total supply.  Curves without a closed form return `None` and are
    /// integrated numerically.
    fn closed_form_integral(&self, _from: Progress, _to: Progress) -> Option<f64> {
        None
    }

    /// Returns progress values where the price changes sharply, in
    /// ascending order.
    ///
    /// Numeric quadrature splits its interval at every hint that falls
    /// strictly inside it, so features narrower than the coarse step are
    /// integrated piece by piece.  Curves with a closed form, or without
    /// sharp features, keep the empty default.
    fn breakpoints(&self) -> &[Progress] {
        &[]
    }

    /// Samples the curve at `points` evenly spaced progress values,
    /// including both ends.
    ///
    /// Returns an empty vector for `points == 0` and the starting point
    /// alone for `points == 1`.
    fn sample(&self, points: usize) -> Vec<CurvePoint> {
        let total_supply = self.total_supply();
        let last = points.saturating_sub(1).max(1);
        (0..points)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let progress = Progress::saturating(i as f64 / last as f64);
                CurvePoint {
                    progress,
                    tokens_sold: progress.tokens(total_supply),
                    price: self.price(progress),
                }
            })
            .collect()
    }
}
