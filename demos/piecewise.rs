//! Multi-phase piecewise-exponential curve example.
//!
//! A long flat first phase followed by four exponential segments, the
//! layout of a typical fair-launch schedule.
//!
//! # Run
//!
//! ```bash
//! cargo run --example piecewise
//! ```

use bonding_curve::config::{
    Breakpoint, CurveConfig, MarketConfig, PhaseOneShape, PiecewiseExponentialConfig,
};
use bonding_curve::domain::Progress;
use bonding_curve::factory::CurveFactory;
use bonding_curve::market::BondingMarket;
use bonding_curve::traits::CurveShape;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Piecewise-Exponential Curve ===\n");

    // ── 1. Configure phases ─────────────────────────────────────────────
    let breakpoints = vec![
        Breakpoint::at_percent(70.0, 7.7e-8)?,
        Breakpoint::at_percent(80.0, 1.25e-7)?,
        Breakpoint::at_percent(90.0, 1.75e-7)?,
        Breakpoint::at_percent(100.0, 2.33e-7)?,
    ];
    let config = PiecewiseExponentialConfig::new(
        7.9e9,
        Progress::from_percent(69.0)?,
        1e-8,
        PhaseOneShape::Flat,
        breakpoints,
    )?;
    let curve = CurveFactory::create(&CurveConfig::Piecewise(config))?;

    // ── 2. Price around the phase boundary ──────────────────────────────
    for percent in [50.0, 69.0, 69.5, 70.0, 85.0, 100.0] {
        let progress = Progress::from_percent(percent)?;
        println!("price({progress:>6}) = {:e} SOL", curve.price(progress));
    }

    // ── 3. Simulate a sale in ten equal tranches ────────────────────────
    let mut market = BondingMarket::new(curve, MarketConfig::default())?;
    let tranche = market.total_supply() / 10.0;
    println!("\nTranche      Cost (SOL)   Avg price");
    for i in 1..=10 {
        let quote = market.buy(tranche)?;
        println!(
            "  {i:>2}      {:>12.6}   {:e}",
            quote.sol_amount(),
            quote.average_price().unwrap_or_default()
        );
    }
    println!(
        "\nStatus {}, full-sale raise {:.6} SOL",
        market.status(),
        market.total_raise_at_full_sale()?
    );
    Ok(())
}
