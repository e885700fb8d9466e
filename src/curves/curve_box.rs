//! Enum dispatch wrapper for all curve families.
//!
//! [`CurveBox`] wraps every concrete curve behind a single enum so that
//! markets over different families share one type.  Each variant is
//! feature-gated to match its curve module.

#[cfg(feature = "logistic")]
use super::logistic::LogisticBlendCurve;
#[cfg(feature = "piecewise")]
use super::piecewise::PiecewiseExponentialCurve;
#[cfg(feature = "power-law")]
use super::power_law::ThresholdPowerLawCurve;

use crate::domain::{CurvePoint, Progress};
use crate::traits::CurveShape;

/// Static-dispatch enum over the built-in curve families.
///
/// The enum implements [`CurveShape`] by delegating every call to the
/// inner curve via `match`.
///
/// # Example
///
/// ```rust
/// use bonding_curve::config::{CurveConfig, ThresholdPowerLawConfig};
/// use bonding_curve::curves::CurveBox;
/// use bonding_curve::domain::Progress;
/// use bonding_curve::factory::CurveFactory;
/// use bonding_curve::traits::CurveShape;
///
/// let threshold = Progress::new(0.5).expect("ok");
/// let cfg = ThresholdPowerLawConfig::new(1_000.0, 2.0, threshold, 2.0, 8.0).expect("valid");
/// let curve: CurveBox = CurveFactory::create(&CurveConfig::PowerLaw(cfg)).expect("curve created");
///
/// assert_eq!(curve.kind(), "power_law");
/// assert_eq!(curve.price(Progress::ZERO), 2.0);
/// assert!(curve.closed_form_integral(Progress::ZERO, Progress::ONE).is_some());
/// assert!(curve.breakpoints().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CurveBox {
    /// Flat floor, then power-law rise.
    #[cfg(feature = "power-law")]
    PowerLaw(Box<ThresholdPowerLawCurve>),

    /// Logistic-blended symmetric curve.
    #[cfg(feature = "logistic")]
    Logistic(Box<LogisticBlendCurve>),

    /// Multi-phase piecewise-exponential curve.
    #[cfg(feature = "piecewise")]
    Piecewise(Box<PiecewiseExponentialCurve>),
}

/// Delegates a method call to every enabled `CurveBox` variant.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            #[cfg(feature = "power-law")]
            CurveBox::PowerLaw(c) => c.$method($($arg),*),
            #[cfg(feature = "logistic")]
            CurveBox::Logistic(c) => c.$method($($arg),*),
            #[cfg(feature = "piecewise")]
            CurveBox::Piecewise(c) => c.$method($($arg),*),
        }
    };
}

impl CurveBox {
    /// Short name of the wrapped family.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "power-law")]
            Self::PowerLaw(_) => "power_law",
            #[cfg(feature = "logistic")]
            Self::Logistic(_) => "logistic",
            #[cfg(feature = "piecewise")]
            Self::Piecewise(_) => "piecewise",
        }
    }
}

impl CurveShape for CurveBox {
    fn price(&self, progress: Progress) -> f64 {
        delegate!(self, price(progress))
    }

    fn total_supply(&self) -> f64 {
        delegate!(self, total_supply())
    }

    fn closed_form_integral(&self, from: Progress, to: Progress) -> Option<f64> {
        delegate!(self, closed_form_integral(from, to))
    }

    fn breakpoints(&self) -> &[Progress] {
        delegate!(self, breakpoints())
    }

    fn sample(&self, points: usize) -> Vec<CurvePoint> {
        delegate!(self, sample(points))
    }
}

#[cfg(feature = "power-law")]
impl From<ThresholdPowerLawCurve> for CurveBox {
    fn from(curve: ThresholdPowerLawCurve) -> Self {
        Self::PowerLaw(Box::new(curve))
    }
}

#[cfg(feature = "logistic")]
impl From<LogisticBlendCurve> for CurveBox {
    fn from(curve: LogisticBlendCurve) -> Self {
        Self::Logistic(Box::new(curve))
    }
}

#[cfg(feature = "piecewise")]
impl From<PiecewiseExponentialCurve> for CurveBox {
    fn from(curve: PiecewiseExponentialCurve) -> Self {
        Self::Piecewise(Box::new(curve))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- PowerLaw -------------------------------------------------------------

    #[cfg(feature = "power-law")]
    mod power_law_tests {
        use super::*;
        use crate::config::ThresholdPowerLawConfig;
        use crate::traits::FromConfig;

        fn boxed() -> (ThresholdPowerLawCurve, CurveBox) {
            let Ok(threshold) = Progress::new(0.5) else {
                panic!("valid progress");
            };
            let Ok(cfg) = ThresholdPowerLawConfig::new(1_000.0, 2.0, threshold, 2.0, 8.0) else {
                panic!("valid config");
            };
            let Ok(curve) = ThresholdPowerLawCurve::from_config(&cfg) else {
                panic!("valid curve");
            };
            (curve.clone(), CurveBox::from(curve))
        }

        #[test]
        fn delegates_price_and_integral() {
            let (inner, boxed) = boxed();
            assert_eq!(boxed.kind(), "power_law");
            assert_eq!(boxed.total_supply(), inner.total_supply());
            assert_eq!(boxed.price(Progress::ONE), inner.price(Progress::ONE));
            assert_eq!(
                boxed.closed_form_integral(Progress::ZERO, Progress::ONE),
                inner.closed_form_integral(Progress::ZERO, Progress::ONE)
            );
        }
    }

    // -- Logistic -------------------------------------------------------------

    #[cfg(feature = "logistic")]
    mod logistic_tests {
        use super::*;
        use crate::config::LogisticBlendConfig;
        use crate::traits::FromConfig;

        #[test]
        fn delegates_without_closed_form() {
            let Ok(b) = Progress::new(0.7) else {
                panic!("valid progress");
            };
            let Ok(cfg) = LogisticBlendConfig::new(7e9, 1e-8, 1e-8, b, 0.2, 0.01, 0.03) else {
                panic!("valid config");
            };
            let Ok(curve) = LogisticBlendCurve::from_config(&cfg) else {
                panic!("valid curve");
            };
            let boxed = CurveBox::from(curve.clone());
            assert_eq!(boxed.kind(), "logistic");
            assert_eq!(boxed.price(b), curve.price(b));
            assert!(boxed
                .closed_form_integral(Progress::ZERO, Progress::ONE)
                .is_none());
            assert_eq!(boxed.sample(5), curve.sample(5));
            assert!(!boxed.breakpoints().is_empty());
            assert_eq!(boxed.breakpoints(), curve.breakpoints());
        }
    }
}
