//! Sampled monotonicity check run on every constructed curve.

use crate::domain::Progress;
use crate::error::ConfigError;
use crate::traits::CurveShape;

/// Number of evenly spaced intervals sampled on `[0, 1]`.
pub const MONOTONICITY_SAMPLES: u32 = 4096;

/// Relative slack for floating-point noise between neighbouring samples.
const RELATIVE_SLACK: f64 = 1e-12;

/// Verifies that `shape` is finite, non-negative and non-decreasing on
/// `[0, 1]`, sampled at [`MONOTONICITY_SAMPLES`] + 1 points.
///
/// Formula-level validation cannot rule out every bad parameter
/// combination, so every built-in curve runs this check before it is
/// handed out.  Custom [`CurveShape`] implementations can call it too.
///
/// # Errors
///
/// - [`ConfigError::InvalidParameter`] if a sampled price is negative or
///   not finite.
/// - [`ConfigError::NonMonotonic`] at the first sample whose price is
///   below its predecessor.
pub fn ensure_monotonic<S: CurveShape + ?Sized>(shape: &S) -> Result<(), ConfigError> {
    let mut prev = f64::NEG_INFINITY;
    for i in 0..=MONOTONICITY_SAMPLES {
        let progress = Progress::saturating(f64::from(i) / f64::from(MONOTONICITY_SAMPLES));
        let price = shape.price(progress);
        if !price.is_finite() || price < 0.0 {
            return Err(ConfigError::InvalidParameter(
                "price must be finite and non-negative",
            ));
        }
        if price < prev - prev.abs() * RELATIVE_SLACK {
            return Err(ConfigError::NonMonotonic {
                progress: progress.get(),
            });
        }
        prev = price;
    }
    Ok(())
}
