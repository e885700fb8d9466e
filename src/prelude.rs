//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use bonding_curve::prelude::*;
//! ```

pub use crate::config::{
    Breakpoint, CurveConfig, LogisticBlendConfig, MarketConfig, PhaseOneShape,
    PiecewiseExponentialConfig, QuadratureConfig, ThresholdPowerLawConfig,
};
pub use crate::curves::CurveBox;
pub use crate::domain::{
    BaseUnits, CurvePoint, MarketStatus, Progress, Quote, TokenScale, TradePolicy,
};
pub use crate::error::{ConfigError, Error, Result, TradeError};
pub use crate::factory::CurveFactory;
pub use crate::market::BondingMarket;
pub use crate::traits::{CurveShape, FromConfig};
