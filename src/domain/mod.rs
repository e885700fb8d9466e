//! Fundamental domain value types used throughout the engine.
//!
//! Progress along the sale, quotes produced by the market, chart samples,
//! integer base-unit amounts, and the market's lifecycle and oversize
//! policy.  Types with invariants use validated constructors.

mod curve_point;
mod market_status;
mod progress;
mod quote;
mod token_units;

pub use curve_point::CurvePoint;
pub use market_status::{MarketStatus, TradePolicy};
pub use progress::Progress;
pub use quote::Quote;
pub use token_units::{BaseUnits, TokenScale};
