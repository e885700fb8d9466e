//! Feature-gated curve implementations and the [`CurveBox`] dispatch enum.
//!
//! Each curve family sits behind its own Cargo feature flag.  Every
//! constructor runs [`ensure_monotonic`] before handing out a curve.
//!
//! # Curve Families
//!
//! | Feature | Curve | Shape |
//! |---------|-------|-------|
//! | `power-law` | [`ThresholdPowerLawCurve`] | flat, then `(x − b)^k` |
//! | `logistic` | [`LogisticBlendCurve`] | logistic-blended sigmoid |
//! | `piecewise` | [`PiecewiseExponentialCurve`] | chained exponential phases |

#[cfg(feature = "logistic")]
pub mod logistic;
#[cfg(feature = "piecewise")]
pub mod piecewise;
#[cfg(feature = "power-law")]
pub mod power_law;

mod curve_box;
mod monotonic;

pub use curve_box::CurveBox;
#[cfg(feature = "logistic")]
pub use logistic::LogisticBlendCurve;
pub use monotonic::{ensure_monotonic, MONOTONICITY_SAMPLES};
#[cfg(feature = "piecewise")]
pub use piecewise::PiecewiseExponentialCurve;
#[cfg(feature = "power-law")]
pub use power_law::ThresholdPowerLawCurve;
