//! # Bonding Curve
//!
//! Bonding-curve pricing engine: price a token sale along a monotone
//! curve, quote and execute buys and sells, invert budgets into token
//! amounts, and calibrate curve parameters to a target total raise.
//!
//! Three curve families are provided, each behind a feature flag:
//!
//! - **Threshold power-law**: flat floor, then `(x − b)^k` rise. `power-law` feature
//! - **Logistic-blended**: sigmoid with a logistic-blended smoothing
//!   coefficient. `logistic` feature
//! - **Piecewise-exponential**: a flat or rising first phase followed by
//!   chained exponential segments. `piecewise` feature
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `power-law` | yes | Threshold power-law curve |
//! | `logistic` | yes | Logistic-blended curve and its calibration |
//! | `piecewise` | yes | Multi-phase piecewise-exponential curve |
//! | `all-curves` | yes | Enables all three curve families |
//! | `serde` | no | `Serialize`/`Deserialize` for configs and value types |
//!
//! # Quick Start
//!
//! ```rust
//! use bonding_curve::config::{CurveConfig, MarketConfig, ThresholdPowerLawConfig};
//! use bonding_curve::domain::Progress;
//! use bonding_curve::factory::CurveFactory;
//! use bonding_curve::market::BondingMarket;
//!
//! // 1. Calibrate a curve so that the whole supply raises 84 SOL
//! let threshold = Progress::from_tokens(4.83e9, 7e9).expect("within supply");
//! let config = ThresholdPowerLawConfig::calibrated(7e9, 1e-9, threshold, 4.5, 84.0)
//!     .expect("feasible target");
//!
//! // 2. Build it through the factory
//! let curve = CurveFactory::create(&CurveConfig::PowerLaw(config)).expect("curve created");
//!
//! // 3. Open a market and trade
//! let mut market = BondingMarket::new(curve, MarketConfig::default()).expect("valid market");
//! assert!((market.total_raise_at_full_sale().expect("finite") - 84.0).abs() < 1e-6);
//!
//! let quote = market.buy(1e9).expect("buy succeeded");
//! assert!(quote.sol_amount() > 0.0);
//!
//! let spend = market.buy_with_budget(5.0).expect("budget buy succeeded");
//! assert!(spend.sol_amount() <= 5.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  uses CurveConfig + CurveFactory + BondingMarket
//! └──────┬───────┘
//!        │ create(&config)
//!        ▼
//! ┌──────────────┐
//! │   Factory     │  validates config, dispatches to FromConfig
//! └──────┬───────┘
//!        │ CurveBox (enum dispatch)
//!        ▼
//! ┌──────────────┐
//! │    Market     │  quotes, trades, budget inversion
//! └──────┬───────┘
//!        │ Integrator + bisection
//!        ▼
//! ┌──────────────┐
//! │    Curves     │  CurveShape: price(progress)
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Progress`](domain::Progress), [`Quote`](domain::Quote), [`BaseUnits`](domain::BaseUnits), [`MarketStatus`](domain::MarketStatus) |
//! | [`traits`] | Core abstractions: [`CurveShape`](traits::CurveShape), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`CurveConfig`](config::CurveConfig), per-family configs, market and quadrature settings |
//! | [`curves`] | Feature-gated curve implementations and [`CurveBox`](curves::CurveBox) |
//! | [`factory`] | [`CurveFactory`](factory::CurveFactory) for config-driven curve construction |
//! | [`math`] | [`Integrator`](math::Integrator) and bracketing bisection |
//! | [`market`] | [`BondingMarket`](market::BondingMarket), the stateful trading surface |
//! | [`calibration`] | Amplitude solves for a target total raise |
//! | [`error`] | [`ConfigError`](error::ConfigError), [`TradeError`](error::TradeError), [`Error`](error::Error) |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Diagnostics
//!
//! The engine emits [`tracing`] events and never installs a subscriber:
//! `debug` for committed trades, calibrations and curve creation, `trace`
//! for quadrature convergence and bisection.

pub mod calibration;
pub mod config;
pub mod curves;
pub mod domain;
pub mod error;
pub mod factory;
pub mod market;
pub mod math;
pub mod prelude;
pub mod traits;
