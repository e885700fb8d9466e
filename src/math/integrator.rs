//! Definite integration of curve shapes over normalized progress.
//!
//! Every cost in the engine is `total_supply · ∫ price(x) dx`.  Curves
//! that expose an analytic antiderivative through
//! [`CurveShape::closed_form_integral`] are integrated exactly; all others
//! go through step-doubling midpoint quadrature with Romberg
//! extrapolation.
//!
//! # Splitting
//!
//! The interval is cut at every [`CurveShape::breakpoints`] hint strictly
//! inside it and each piece converges on its own.  A piece is accepted
//! once its error estimate is within the tolerance of its own value or of
//! its width-proportional share of the whole interval, whichever is
//! larger, so near-zero pieces do not stall convergence.
//!
//! # Sign Convention
//!
//! Results are signed: `integrate(a, b) == −integrate(b, a)` and
//! `integrate(a, a) == 0`.

use crate::config::QuadratureConfig;
use crate::domain::Progress;
use crate::error::{ConfigError, TradeError};
use crate::traits::CurveShape;

/// Integrates any [`CurveShape`] between two progress values.
///
/// # Examples
///
/// ```
/// use bonding_curve::config::{QuadratureConfig, ThresholdPowerLawConfig};
/// use bonding_curve::curves::ThresholdPowerLawCurve;
/// use bonding_curve::domain::Progress;
/// use bonding_curve::math::Integrator;
/// use bonding_curve::traits::FromConfig;
///
/// let cfg = ThresholdPowerLawConfig::new(1_000.0, 2.0, Progress::new(0.5).expect("ok"), 2.0, 8.0)
///     .expect("valid");
/// let curve = ThresholdPowerLawCurve::from_config(&cfg).expect("monotone");
/// let integrator = Integrator::new(QuadratureConfig::default()).expect("valid");
///
/// let raise = integrator.integrate(&curve, Progress::ZERO, Progress::ONE).expect("finite");
/// assert!((raise - 1_000.0 * (2.0 + 1.0 / 3.0)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Integrator {
    config: QuadratureConfig,
}

impl Integrator {
    /// Creates an integrator with the given quadrature settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if the settings are
    /// invalid.
    pub fn new(config: QuadratureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the quadrature settings.
    #[must_use]
    pub const fn config(&self) -> &QuadratureConfig {
        &self.config
    }

    /// Returns `total_supply · ∫[from, to] price(x) dx`, signed.
    ///
    /// # Errors
    ///
    /// - [`TradeError::NonConvergence`] if quadrature exhausts its levels.
    /// - [`TradeError::NonFinite`] if the result is infinite or `NaN`.
    pub fn integrate<S: CurveShape + ?Sized>(
        &self,
        shape: &S,
        from: Progress,
        to: Progress,
    ) -> Result<f64, TradeError> {
        if from == to {
            return Ok(0.0);
        }
        let (lo, hi, sign) = if from < to {
            (from, to, 1.0)
        } else {
            (to, from, -1.0)
        };

        let unit = match shape.closed_form_integral(lo, hi) {
            Some(area) => area,
            None => self.quadrature(shape, lo.get(), hi.get())?,
        };

        let scaled = sign * unit * shape.total_supply();
        if !scaled.is_finite() {
            return Err(TradeError::NonFinite("integral is not finite"));
        }
        Ok(scaled)
    }

    fn quadrature<S: CurveShape + ?Sized>(
        &self,
        shape: &S,
        a: f64,
        b: f64,
    ) -> Result<f64, TradeError> {
        let mut edges = Vec::with_capacity(shape.breakpoints().len() + 2);
        edges.push(a);
        edges.extend(
            shape
                .breakpoints()
                .iter()
                .map(Progress::get)
                .filter(|x| *x > a && *x < b),
        );
        edges.push(b);
        edges.dedup();

        let density = midpoint(shape, a, b, u64::from(self.config.initial_steps)).abs() / (b - a);
        edges
            .windows(2)
            .map(|piece| self.romberg(shape, piece[0], piece[1], density * (piece[1] - piece[0])))
            .sum()
    }

    fn romberg<S: CurveShape + ?Sized>(
        &self,
        shape: &S,
        a: f64,
        b: f64,
        share: f64,
    ) -> Result<f64, TradeError> {
        let mut steps = u64::from(self.config.initial_steps);
        let mut prev = vec![midpoint(shape, a, b, steps)];

        for level in 1..=self.config.max_levels as usize {
            steps *= 2;
            let mut row = Vec::with_capacity(level + 1);
            row.push(midpoint(shape, a, b, steps));

            let mut factor = 1.0;
            for j in 1..=level {
                factor *= 4.0;
                let refined = row[j - 1] + (row[j - 1] - prev[j - 1]) / (factor - 1.0);
                row.push(refined);
            }

            let estimate = row[level];
            if !estimate.is_finite() {
                return Err(TradeError::NonFinite("quadrature estimate is not finite"));
            }
            let delta = (estimate - prev[level - 1]).abs();
            if level >= self.config.min_levels as usize
                && delta <= self.config.relative_tolerance * estimate.abs().max(share)
            {
                tracing::trace!(levels = level, steps, "quadrature converged");
                return Ok(estimate);
            }
            prev = row;
        }

        Err(TradeError::NonConvergence(
            "quadrature did not reach its tolerance",
        ))
    }
}

/// Composite midpoint rule with `steps` equal subintervals.
#[allow(clippy::cast_precision_loss)]
fn midpoint<S: CurveShape + ?Sized>(shape: &S, a: f64, b: f64, steps: u64) -> f64 {
    let h = (b - a) / steps as f64;
    let sum: f64 = (0..steps)
        .map(|i| shape.price(Progress::saturating(a + (i as f64 + 0.5) * h)))
        .sum();
    sum * h
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    /// `price = x²` over a supply of 10, no closed form.
    struct Square;

    impl CurveShape for Square {
        fn price(&self, progress: Progress) -> f64 {
            progress.get() * progress.get()
        }

        fn total_supply(&self) -> f64 {
            10.0
        }
    }

    /// Same curve with its antiderivative exposed.
    struct ExactSquare;

    impl CurveShape for ExactSquare {
        fn price(&self, progress: Progress) -> f64 {
            progress.get() * progress.get()
        }

        fn total_supply(&self) -> f64 {
            10.0
        }

        fn closed_form_integral(&self, from: Progress, to: Progress) -> Option<f64> {
            Some((to.get().powi(3) - from.get().powi(3)) / 3.0)
        }
    }

    /// Flat then `(x − 0.3)^2.5`, smooth enough for Romberg.
    struct Knee;

    impl CurveShape for Knee {
        fn price(&self, progress: Progress) -> f64 {
            (progress.get() - 0.3).max(0.0).powf(2.5)
        }

        fn total_supply(&self) -> f64 {
            1.0
        }
    }

    /// Square-root kink that converges slowly.
    struct Kink;

    impl CurveShape for Kink {
        fn price(&self, progress: Progress) -> f64 {
            (progress.get() - 0.3).max(0.0).sqrt()
        }

        fn total_supply(&self) -> f64 {
            1.0
        }
    }

    /// Near-step at 0.6 narrower than the coarsest grid, with a split
    /// hint at the step.
    struct Step {
        hints: Vec<Progress>,
    }

    impl CurveShape for Step {
        fn price(&self, progress: Progress) -> f64 {
            let dx = progress.get() - 0.6;
            dx / (1e-12 + dx * dx).sqrt() + 1.0
        }

        fn total_supply(&self) -> f64 {
            1.0
        }

        fn breakpoints(&self) -> &[Progress] {
            &self.hints
        }
    }

    struct Explosive;

    impl CurveShape for Explosive {
        fn price(&self, _progress: Progress) -> f64 {
            f64::MAX
        }

        fn total_supply(&self) -> f64 {
            f64::MAX
        }
    }

    fn p(v: f64) -> Progress {
        let Ok(p) = Progress::new(v) else {
            panic!("valid progress");
        };
        p
    }

    fn integrator() -> Integrator {
        let Ok(i) = Integrator::new(QuadratureConfig::default()) else {
            panic!("valid config");
        };
        i
    }

    // -- convention -----------------------------------------------------------

    #[test]
    fn empty_interval_is_zero() {
        let Ok(v) = integrator().integrate(&Square, p(0.4), p(0.4)) else {
            panic!("expected Ok");
        };
        assert_eq!(v, 0.0);
    }

    #[test]
    fn reversed_bounds_flip_sign() {
        let i = integrator();
        let (Ok(fwd), Ok(back)) = (
            i.integrate(&Square, p(0.2), p(0.9)),
            i.integrate(&Square, p(0.9), p(0.2)),
        ) else {
            panic!("expected Ok");
        };
        assert!(fwd > 0.0);
        assert_eq!(fwd, -back);
    }

    // -- quadrature -----------------------------------------------------------

    #[test]
    fn quadrature_matches_polynomial() {
        let Ok(v) = integrator().integrate(&Square, Progress::ZERO, Progress::ONE) else {
            panic!("expected Ok");
        };
        assert!((v - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn closed_form_is_preferred() {
        let Ok(v) = integrator().integrate(&ExactSquare, p(0.5), Progress::ONE) else {
            panic!("expected Ok");
        };
        assert_eq!(v, (1.0 - 0.125) / 3.0 * 10.0);
    }

    #[test]
    fn quadrature_is_additive() {
        let i = integrator();
        let (Ok(ab), Ok(bc), Ok(ac)) = (
            i.integrate(&Knee, p(0.1), p(0.45)),
            i.integrate(&Knee, p(0.45), p(0.95)),
            i.integrate(&Knee, p(0.1), p(0.95)),
        ) else {
            panic!("expected Ok");
        };
        assert!(((ab + bc) - ac).abs() <= 1e-9 * ac.abs());
    }

    #[test]
    fn breakpoints_split_a_near_step() {
        let stepped = Step {
            hints: vec![p(0.6)],
        };
        let Ok(v) = integrator().integrate(&stepped, Progress::ZERO, Progress::ONE) else {
            panic!("split integral must converge");
        };
        // ∫ (sign(x − 0.6) + 1) = 0.8, less O(1e-6) from the rounded corner
        assert!((v - 0.8).abs() < 1e-5);
    }

    #[test]
    fn hints_outside_the_interval_are_ignored() {
        let stepped = Step {
            hints: vec![p(0.6)],
        };
        let Ok(v) = integrator().integrate(&stepped, p(0.7), Progress::ONE) else {
            panic!("expected Ok");
        };
        assert!((v - 0.6).abs() < 1e-9);
    }

    #[test]
    fn exhausted_levels_report_non_convergence() {
        let cfg = QuadratureConfig {
            initial_steps: 1,
            relative_tolerance: 1e-15,
            min_levels: 1,
            max_levels: 2,
        };
        let Ok(i) = Integrator::new(cfg) else {
            panic!("valid config");
        };
        let result = i.integrate(&Kink, Progress::ZERO, Progress::ONE);
        assert!(matches!(result, Err(TradeError::NonConvergence(_))));
    }

    #[test]
    fn unsplit_near_step_does_not_converge() {
        let result = integrator().integrate(&Step { hints: Vec::new() }, Progress::ZERO, Progress::ONE);
        assert!(matches!(result, Err(TradeError::NonConvergence(_))));
    }

    #[test]
    fn overflow_reports_non_finite() {
        let result = integrator().integrate(&Explosive, Progress::ZERO, Progress::ONE);
        assert!(matches!(result, Err(TradeError::NonFinite(_))));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let cfg = QuadratureConfig {
            initial_steps: 0,
            ..QuadratureConfig::default()
        };
        assert!(Integrator::new(cfg).is_err());
    }
}
