//! Solving curve amplitudes for a target total raise.
//!
//! For every built-in family the revenue of selling the whole supply is
//! affine in the amplitude:
//!
//! ```text
//! raise(a) = P0 · S + a · U
//! ```
//!
//! where `U` is the revenue of the amplitude-one, zero-floor curve.  The
//! amplitude hitting a target `R` is therefore `(R − P0 · S) / U`, a
//! one-shot solve with no iteration.
//!
//! | Family | `U` |
//! |--------|-----|
//! | power-law | `(1 − b)^(k + 1) / (k + 1) · S`, closed form |
//! | logistic | `S · ∫ g(x) dx`, by quadrature |

use crate::domain::Progress;
use crate::error::ConfigError;

#[cfg(feature = "logistic")]
use crate::config::{LogisticBlendConfig, QuadratureConfig};

/// Amplitude of a threshold power-law curve whose full sale raises
/// `target_raise`.
///
/// # Examples
///
/// ```
/// use bonding_curve::calibration::power_law_amplitude;
/// use bonding_curve::domain::Progress;
///
/// let threshold = Progress::from_tokens(4.83e9, 7e9).expect("ok");
/// let a = power_law_amplitude(7e9, 1e-9, threshold, 4.5, 84.0).expect("feasible");
/// assert!((a - 3.795_474_330_559e-5).abs() / a < 1e-9);
/// ```
///
/// # Errors
///
/// - [`ConfigError::InvalidParameter`] if the supply, base price or
///   target is not finite, or the supply or base price is out of range.
/// - [`ConfigError::Infeasible`] if `target_raise < base_price · total_supply`.
/// - [`ConfigError::DegenerateCalibration`] if the rising leg's unit
///   revenue is zero, negative or not finite.
pub fn power_law_amplitude(
    total_supply: f64,
    base_price: f64,
    threshold: Progress,
    exponent: f64,
    target_raise: f64,
) -> Result<f64, ConfigError> {
    let floor = floor_raise(total_supply, base_price, target_raise)?;
    let power = exponent + 1.0;
    let unit_raise = (1.0 - threshold.get()).powf(power) / power * total_supply;
    let amplitude = solve(floor, unit_raise, target_raise)?;
    tracing::debug!(
        family = "power_law",
        target_raise,
        amplitude,
        "amplitude calibrated"
    );
    Ok(amplitude)
}

/// Amplitude of a logistic-blended curve whose full sale raises
/// `target_raise`.  The `amplitude` already set on `config` is ignored;
/// every other parameter is kept.
///
/// # Errors
///
/// - Any error from building the unit curve.
/// - [`ConfigError::Infeasible`] if `target_raise` is below the floor
///   revenue.
/// - [`ConfigError::DegenerateCalibration`] if the unit revenue cannot be
///   integrated or is not positive.
#[cfg(feature = "logistic")]
pub fn logistic_amplitude(
    config: &LogisticBlendConfig,
    target_raise: f64,
    quadrature: &QuadratureConfig,
) -> Result<f64, ConfigError> {
    use crate::curves::LogisticBlendCurve;
    use crate::math::Integrator;
    use crate::traits::FromConfig;

    let floor = floor_raise(config.total_supply(), config.base_price(), target_raise)?;
    let unit = LogisticBlendConfig::new(
        config.total_supply(),
        0.0,
        1.0,
        config.inflection(),
        config.smoothing_left(),
        config.smoothing_right(),
        config.transition_width(),
    )?;
    let curve = LogisticBlendCurve::from_config(&unit)?;
    let unit_raise = Integrator::new(*quadrature)?
        .integrate(&curve, Progress::ZERO, Progress::ONE)
        .map_err(|_| ConfigError::DegenerateCalibration("unit revenue could not be integrated"))?;

    let amplitude = solve(floor, unit_raise, target_raise)?;
    tracing::debug!(
        family = "logistic",
        target_raise,
        amplitude,
        "amplitude calibrated"
    );
    Ok(amplitude)
}

/// Validates inputs and returns the floor revenue `P0 · S`.
fn floor_raise(total_supply: f64, base_price: f64, target_raise: f64) -> Result<f64, ConfigError> {
    crate::config::check_total_supply(total_supply)?;
    if !base_price.is_finite() || base_price < 0.0 {
        return Err(ConfigError::InvalidParameter(
            "base price must be finite and non-negative",
        ));
    }
    if !target_raise.is_finite() {
        return Err(ConfigError::InvalidParameter("target raise must be finite"));
    }
    let floor = base_price * total_supply;
    if target_raise < floor {
        return Err(ConfigError::Infeasible(
            "target raise is below the floor revenue",
        ));
    }
    Ok(floor)
}

fn solve(floor: f64, unit_raise: f64, target_raise: f64) -> Result<f64, ConfigError> {
    if !unit_raise.is_finite() || unit_raise <= 0.0 {
        return Err(ConfigError::DegenerateCalibration(
            "unit revenue must be finite and positive",
        ));
    }
    let amplitude = (target_raise - floor) / unit_raise;
    if !amplitude.is_finite() {
        return Err(ConfigError::DegenerateCalibration(
            "solved amplitude is not finite",
        ));
    }
    Ok(amplitude)
}
