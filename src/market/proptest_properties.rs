//! Property-based tests using `proptest` for curve and market invariants.
//!
//! 1. **Monotonicity**: every accepted curve has non-decreasing prices.
//! 2. **Additivity**: `I(a, b) + I(b, c) == I(a, c)` within `1e-9`.
//! 3. **Round trip**: `buy(t)` then `sell(t)` restores the cursor exactly
//!    for any amount, fractional or not.
//! 4. **Budget inversion**: the budget quote fits the budget and one
//!    base unit more does not.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::{
    Breakpoint, LogisticBlendConfig, MarketConfig, PhaseOneShape, PiecewiseExponentialConfig,
    QuadratureConfig, ThresholdPowerLawConfig,
};
use crate::curves::{LogisticBlendCurve, PiecewiseExponentialCurve, ThresholdPowerLawCurve};
use crate::domain::Progress;
use crate::math::Integrator;
use crate::market::BondingMarket;
use crate::traits::{CurveShape, FromConfig};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn progress(v: f64) -> Progress {
    let Ok(p) = Progress::new(v) else {
        panic!("valid progress");
    };
    p
}

fn make_power_law(
    base: f64,
    threshold: f64,
    exponent: f64,
    amplitude: f64,
) -> Result<ThresholdPowerLawCurve, crate::error::ConfigError> {
    let cfg = ThresholdPowerLawConfig::new(1e6, base, progress(threshold), exponent, amplitude)?;
    ThresholdPowerLawCurve::from_config(&cfg)
}

fn make_logistic(
    amplitude: f64,
    inflection: f64,
    left: f64,
    right: f64,
    width: f64,
) -> Result<LogisticBlendCurve, crate::error::ConfigError> {
    let cfg =
        LogisticBlendConfig::new(7e9, 1e-8, amplitude, progress(inflection), left, right, width)?;
    LogisticBlendCurve::from_config(&cfg)
}

fn make_piecewise(
    phase_one_end: f64,
    shape: PhaseOneShape,
    growth: &[f64],
) -> Result<PiecewiseExponentialCurve, crate::error::ConfigError> {
    #[allow(clippy::cast_precision_loss)]
    let step = (1.0 - phase_one_end) / growth.len() as f64;
    let mut price = 1e-8;
    let mut breakpoints = Vec::with_capacity(growth.len());
    for (i, g) in growth.iter().enumerate() {
        price *= g;
        #[allow(clippy::cast_precision_loss)]
        let at = if i + 1 == growth.len() {
            1.0
        } else {
            phase_one_end + step * (i + 1) as f64
        };
        breakpoints.push(Breakpoint::new(progress(at), price));
    }
    let cfg = PiecewiseExponentialConfig::new(7.9e9, progress(phase_one_end), 1e-8, shape, breakpoints)?;
    PiecewiseExponentialCurve::from_config(&cfg)
}

fn is_non_decreasing<C: CurveShape>(curve: &C) -> bool {
    curve
        .sample(513)
        .windows(2)
        .all(|w| w[1].price >= w[0].price * (1.0 - 1e-12))
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Fractions in `[lo, hi]` on a 1/1000 grid.
fn fraction(lo: u32, hi: u32) -> impl Strategy<Value = f64> {
    (lo..=hi).prop_map(|v| f64::from(v) / 1_000.0)
}

/// Log-uniform values `10^e` for `e` in `[lo_exp, hi_exp]`.
fn log_scale(lo_exp: f64, hi_exp: f64) -> impl Strategy<Value = f64> {
    (lo_exp..=hi_exp).prop_map(|e| 10_f64.powf(e))
}

/// Segment growth factors in `[1, 4]`.
fn growth_strategy() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(fraction(1_000, 4_000), 1..6)
}

// ---------------------------------------------------------------------------
// Property 1: Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_power_law_is_monotone(
        base in fraction(0, 1_000),
        threshold in fraction(0, 950),
        exponent in fraction(1_100, 6_000),
        amplitude in fraction(0, 10_000),
    ) {
        let curve = make_power_law(base, threshold, exponent, amplitude);
        prop_assert!(curve.is_ok());
        let Ok(curve) = curve else { return Ok(()); };
        prop_assert!(is_non_decreasing(&curve));
    }

    #[test]
    fn prop_logistic_is_monotone(
        amplitude in fraction(0, 1_000),
        inflection in fraction(50, 950),
        left in log_scale(-9.0, 0.0),
        right in log_scale(-9.0, 0.0),
        width in log_scale(-9.0, -0.7),
    ) {
        let curve = make_logistic(amplitude * 1e-7, inflection, left, right, width);
        prop_assert!(curve.is_ok());
        let Ok(curve) = curve else { return Ok(()); };
        prop_assert!(is_non_decreasing(&curve));
    }

    #[test]
    fn prop_piecewise_is_monotone(
        phase_one_end in fraction(100, 900),
        exponential in any::<bool>(),
        growth in growth_strategy(),
    ) {
        let shape = if exponential { PhaseOneShape::Exponential } else { PhaseOneShape::Flat };
        let curve = make_piecewise(phase_one_end, shape, &growth);
        prop_assert!(curve.is_ok());
        let Ok(curve) = curve else { return Ok(()); };
        prop_assert!(is_non_decreasing(&curve));
    }
}

// ---------------------------------------------------------------------------
// Property 2: Additivity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_logistic_integral_is_additive(
        mut cuts in proptest::collection::vec(fraction(0, 1_000), 3),
        left in log_scale(-9.0, 0.0),
        right in log_scale(-9.0, 0.0),
        width in log_scale(-9.0, -1.0),
    ) {
        cuts.sort_by(f64::total_cmp);
        let (a, b, c) = (progress(cuts[0]), progress(cuts[1]), progress(cuts[2]));
        let Ok(curve) = make_logistic(1e-8, 0.7, left, right, width) else {
            panic!("valid curve");
        };
        let Ok(integrator) = Integrator::new(QuadratureConfig::default()) else {
            panic!("valid quadrature");
        };
        let (Ok(ab), Ok(bc), Ok(ac)) = (
            integrator.integrate(&curve, a, b),
            integrator.integrate(&curve, b, c),
            integrator.integrate(&curve, a, c),
        ) else {
            panic!("integration failed");
        };
        prop_assert!(
            ((ab + bc) - ac).abs() <= 1e-9 * ac.abs(),
            "I(a,b) + I(b,c) = {} but I(a,c) = {}",
            ab + bc, ac
        );
    }

    #[test]
    fn prop_piecewise_integral_is_additive(
        mut cuts in proptest::collection::vec(fraction(0, 1_000), 3),
        growth in growth_strategy(),
    ) {
        cuts.sort_by(f64::total_cmp);
        let (a, b, c) = (progress(cuts[0]), progress(cuts[1]), progress(cuts[2]));
        let Ok(curve) = make_piecewise(0.5, PhaseOneShape::Flat, &growth) else {
            panic!("valid curve");
        };
        let integrator = Integrator::default();
        let (Ok(ab), Ok(bc), Ok(ac)) = (
            integrator.integrate(&curve, a, b),
            integrator.integrate(&curve, b, c),
            integrator.integrate(&curve, a, c),
        ) else {
            panic!("integration failed");
        };
        prop_assert!(((ab + bc) - ac).abs() <= 1e-9 * ac.abs());
    }
}

// ---------------------------------------------------------------------------
// Property 3: Buy / sell round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_buy_then_sell_restores_cursor(
        start in 0.0..500_000.0f64,
        tokens in 1e-6..500_000.0f64,
        threshold in fraction(0, 900),
    ) {
        let Ok(curve) = make_power_law(1e-3, threshold, 2.5, 0.5) else {
            panic!("valid curve");
        };
        let Ok(mut market) =
            BondingMarket::with_sold_tokens(curve, MarketConfig::default(), start)
        else {
            panic!("valid market");
        };
        let (units, cursor) = (market.sold_units(), market.sold_tokens());
        let Ok(bought) = market.buy(tokens) else {
            panic!("buy failed");
        };
        let Ok(sold) = market.sell(tokens) else {
            panic!("sell failed");
        };
        prop_assert_eq!(market.sold_units(), units);
        prop_assert_eq!(market.sold_tokens(), cursor);
        prop_assert_eq!(bought.token_amount(), sold.token_amount());
        prop_assert!((bought.sol_amount() - sold.sol_amount()).abs() <= 1e-9 * bought.sol_amount());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Budget inversion
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_budget_quote_fits_and_is_maximal(
        share in fraction(10, 990),
        threshold in fraction(0, 900),
        exponent in fraction(1_500, 5_000),
    ) {
        let Ok(curve) = make_power_law(1e-3, threshold, exponent, 0.5) else {
            panic!("valid curve");
        };
        let Ok(market) = BondingMarket::new(curve, MarketConfig::default()) else {
            panic!("valid market");
        };
        let Ok(full) = market.total_raise_at_full_sale() else {
            panic!("full raise");
        };
        let budget = full * share;
        let Ok(quote) = market.buy_for_budget(budget) else {
            panic!("budget quote");
        };
        prop_assert!(quote.sol_amount() <= budget);

        let Ok(next) = market.quote_buy(quote.token_amount() + market.scale().unit()) else {
            panic!("next quote");
        };
        prop_assert!(next.sol_amount() > budget);
    }
}
