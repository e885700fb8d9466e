//! Logistic-blended curve example.
//!
//! Shows how the left and right smoothing coefficients shape the curve
//! around its inflection point and calibrates the amplitude to a target.
//!
//! # Run
//!
//! ```bash
//! cargo run --example logistic
//! ```

use bonding_curve::calibration::logistic_amplitude;
use bonding_curve::config::{CurveConfig, LogisticBlendConfig, MarketConfig, QuadratureConfig};
use bonding_curve::domain::Progress;
use bonding_curve::factory::CurveFactory;
use bonding_curve::market::BondingMarket;
use bonding_curve::traits::CurveShape;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Logistic-Blended Curve ===\n");

    // ── 1. Compare smoothing settings ───────────────────────────────────
    let inflection = Progress::from_percent(70.0)?;
    for (left, right) in [(0.2, 0.01), (0.05, 0.05), (0.01, 0.2)] {
        let config = LogisticBlendConfig::new(7e9, 1e-8, 1e-8, inflection, left, right, 0.03)?;
        let curve = CurveFactory::create(&CurveConfig::Logistic(config))?;
        println!(
            "cL={left:<5} cR={right:<5}  price(0%)={:.4e}  price(70%)={:.4e}  price(100%)={:.4e}",
            curve.price(Progress::ZERO),
            curve.price(inflection),
            curve.price(Progress::ONE),
        );
    }

    // ── 2. Calibrate the amplitude for a 200 SOL raise ──────────────────
    let base = LogisticBlendConfig::new(7e9, 1e-8, 1e-8, inflection, 0.2, 0.01, 0.03)?;
    let amplitude = logistic_amplitude(&base, 200.0, &QuadratureConfig::default())?;
    let config = base.with_amplitude(amplitude)?;
    println!("\nCalibrated amplitude: {amplitude:e}");

    // ── 3. Trade against the calibrated curve ───────────────────────────
    let curve = CurveFactory::create(&CurveConfig::Logistic(config))?;
    let mut market = BondingMarket::new(curve, MarketConfig::default())?;
    println!(
        "Full-sale raise: {:.6} SOL",
        market.total_raise_at_full_sale()?
    );

    let quote = market.buy_with_budget(50.0)?;
    println!(
        "\n50 SOL bought {:e} tokens, progress {}, spot {:e}",
        quote.token_amount(),
        market.progress(),
        market.spot_price()
    );

    let quote = market.buy(market.remaining_tokens())?;
    println!(
        "Remainder cost {:.6} SOL, status {}",
        quote.sol_amount(),
        market.status()
    );
    Ok(())
}
