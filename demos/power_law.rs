//! Threshold power-law launch example.
//!
//! Calibrates a flat-then-power-law curve to a target raise, walks a
//! market through a few buys and a sell, and inverts a budget.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=bonding_curve=debug cargo run --example power_law
//! ```

use bonding_curve::config::{CurveConfig, MarketConfig, ThresholdPowerLawConfig};
use bonding_curve::domain::Progress;
use bonding_curve::factory::CurveFactory;
use bonding_curve::market::BondingMarket;
use bonding_curve::traits::CurveShape;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Threshold Power-Law Curve ===\n");

    // ── 1. Calibrate the curve to an 84 SOL raise ───────────────────────
    let total_supply = 7e9;
    let threshold = Progress::from_tokens(4.83e9, total_supply)?;
    let config = ThresholdPowerLawConfig::calibrated(total_supply, 1e-9, threshold, 4.5, 84.0)?;

    println!("Total supply: {total_supply:e} tokens");
    println!("Base price:   {:e} SOL", config.base_price());
    println!("Threshold:    {threshold}");
    println!("Exponent:     {}", config.exponent());
    println!("Amplitude:    {:e}", config.amplitude());

    // ── 2. Build the curve and open a market ────────────────────────────
    let curve = CurveFactory::create(&CurveConfig::PowerLaw(config))?;
    let mut market = BondingMarket::new(curve, MarketConfig::default())?;
    println!(
        "\nFull-sale raise: {:.6} SOL",
        market.total_raise_at_full_sale()?
    );

    // ── 3. Sample the curve ─────────────────────────────────────────────
    println!("\nProgress      Price (SOL)");
    for point in market.curve().sample(11) {
        println!("  {:>7}    {:e}", point.progress.to_string(), point.price);
    }

    // ── 4. Buy in tranches ──────────────────────────────────────────────
    println!();
    for tranche in [2e9, 2e9, 2e9] {
        let quote = market.buy(tranche)?;
        println!(
            "Bought {:e} tokens for {:.6} SOL (avg {:e}), progress now {}",
            quote.token_amount(),
            quote.sol_amount(),
            quote.average_price().unwrap_or_default(),
            market.progress()
        );
    }

    // ── 5. Sell some back ───────────────────────────────────────────────
    let refund = market.sell(1e9)?;
    println!(
        "\nSold {:e} tokens for {:.6} SOL, spot price {:e}",
        refund.token_amount(),
        refund.sol_amount(),
        market.spot_price()
    );

    // ── 6. Spend a budget ───────────────────────────────────────────────
    let quote = market.buy_for_budget(10.0)?;
    println!(
        "\n10 SOL buys {:e} tokens (cost {:.9} SOL)",
        quote.token_amount(),
        quote.sol_amount()
    );

    println!("\nStatus: {}", market.status());
    Ok(())
}
