//! Bracketing bisection for inverting monotone cost functions.

use crate::error::TradeError;

/// Result of [`bisect_below`]: the largest argument found whose cost
/// stays within the target, plus the number of halvings performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    /// Highest argument known to satisfy `cost(low) <= target`.
    pub low: u128,
    /// Lowest argument known to exceed the target.
    pub high: u128,
    /// Halvings performed.
    pub iterations: u32,
}

/// Narrows the integer bracket `[low, high]` around the point where a
/// non-decreasing `cost` crosses `target`.
///
/// The caller guarantees `cost(low) <= target < cost(high)`; the
/// invariant holds after every step.  The loop stops once the bracket is
/// down to adjacent integers or after `max_iterations` halvings,
/// whichever comes first.  Adjacent integers are always reached within
/// 128 halvings.
///
/// # Errors
///
/// Propagates any error returned by `cost`.
pub fn bisect_below<F>(
    mut low: u128,
    mut high: u128,
    target: f64,
    max_iterations: u32,
    mut cost: F,
) -> Result<Bracket, TradeError>
where
    F: FnMut(u128) -> Result<f64, TradeError>,
{
    let mut iterations = 0;
    while high.saturating_sub(low) > 1 && iterations < max_iterations {
        let mid = low + (high - low) / 2;
        if cost(mid)? <= target {
            low = mid;
        } else {
            high = mid;
        }
        iterations += 1;
    }
    tracing::trace!(iterations, low = %low, high = %high, "bisection finished");
    Ok(Bracket {
        low,
        high,
        iterations,
    })
}
