//! Sampled point on a price curve.

use super::Progress;

/// One `(progress, tokens sold, price)` sample, as consumed by charting
/// front-ends.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Sale progress of the sample.
    pub progress: Progress,
    /// Tokens sold at this progress.
    pub tokens_sold: f64,
    /// Unit price at this progress.
    pub price: f64,
}
