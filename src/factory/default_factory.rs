//! Default curve factory implementation.

use crate::config::CurveConfig;
use crate::curves::CurveBox;
use crate::error::ConfigError;

#[cfg(any(feature = "power-law", feature = "logistic", feature = "piecewise"))]
use crate::traits::FromConfig;

/// Stateless factory for building curves from configuration.
///
/// `CurveFactory` is the single entry point for constructing any built-in
/// curve.  It validates the [`CurveConfig`], delegates to the curve's
/// [`FromConfig`] implementation (which also runs the sampled
/// monotonicity check), and wraps the result in a [`CurveBox`].
///
/// # Example
///
/// ```rust
/// use bonding_curve::config::{CurveConfig, ThresholdPowerLawConfig};
/// use bonding_curve::domain::Progress;
/// use bonding_curve::factory::CurveFactory;
/// use bonding_curve::traits::CurveShape;
///
/// let threshold = Progress::new(0.5).expect("ok");
/// let cfg = ThresholdPowerLawConfig::new(1_000.0, 2.0, threshold, 2.0, 8.0).expect("valid");
///
/// let curve = CurveFactory::create(&CurveConfig::PowerLaw(cfg)).expect("curve created");
/// assert_eq!(curve.total_supply(), 1_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveFactory;

impl CurveFactory {
    /// Creates a curve from the given configuration.
    ///
    /// # Flow
    ///
    /// 1. Validate the configuration via [`CurveConfig::validate`].
    /// 2. Match on the config variant.
    /// 3. Delegate to the curve's [`FromConfig`] implementation.
    /// 4. Wrap the curve in the corresponding [`CurveBox`] variant.
    ///
    /// # Errors
    ///
    /// - Any [`ConfigError`] from validation or curve construction.
    /// - [`ConfigError::InvalidParameter`] if the requested family's
    ///   feature is not enabled.
    pub fn create(config: &CurveConfig) -> Result<CurveBox, ConfigError> {
        config.validate()?;

        let curve: CurveBox = match config {
            #[cfg(feature = "power-law")]
            CurveConfig::PowerLaw(cfg) => CurveBox::PowerLaw(Box::new(
                crate::curves::ThresholdPowerLawCurve::from_config(cfg)?,
            )),

            #[cfg(feature = "logistic")]
            CurveConfig::Logistic(cfg) => CurveBox::Logistic(Box::new(
                crate::curves::LogisticBlendCurve::from_config(cfg)?,
            )),

            #[cfg(feature = "piecewise")]
            CurveConfig::Piecewise(cfg) => CurveBox::Piecewise(Box::new(
                crate::curves::PiecewiseExponentialCurve::from_config(cfg)?,
            )),

            // Catch-all for config variants whose curve feature is disabled.
            #[allow(unreachable_patterns)]
            _ => {
                return Err(ConfigError::InvalidParameter(
                    "requested curve type is not enabled (missing feature flag)",
                ))
            }
        };

        tracing::debug!(
            kind = curve.kind(),
            total_supply = config.total_supply(),
            "curve created"
        );
        Ok(curve)
    }
}

#[cfg(test)]
#[allow(clippy::panic, unused_imports, dead_code)]
mod tests {
    use super::*;
    use crate::config::{
        Breakpoint, LogisticBlendConfig, PhaseOneShape, PiecewiseExponentialConfig,
        ThresholdPowerLawConfig,
    };
    use crate::domain::Progress;
    use crate::traits::CurveShape;

    // -- helpers --------------------------------------------------------------

    fn progress(v: f64) -> Progress {
        let Ok(p) = Progress::new(v) else {
            panic!("valid progress");
        };
        p
    }

    // -- PowerLaw via factory -------------------------------------------------

    #[cfg(feature = "power-law")]
    mod power_law_tests {
        use super::*;

        fn config() -> CurveConfig {
            let Ok(cfg) = ThresholdPowerLawConfig::new(1_000.0, 2.0, progress(0.5), 2.0, 8.0)
            else {
                panic!("valid config");
            };
            CurveConfig::PowerLaw(cfg)
        }

        #[test]
        fn create_power_law() {
            let Ok(curve) = CurveFactory::create(&config()) else {
                panic!("expected Ok");
            };
            assert!(matches!(curve, CurveBox::PowerLaw(_)));
            assert_eq!(curve.price(Progress::ZERO), 2.0);
        }

        #[test]
        fn created_curve_has_closed_form() {
            let Ok(curve) = CurveFactory::create(&config()) else {
                panic!("expected Ok");
            };
            assert!(curve
                .closed_form_integral(Progress::ZERO, Progress::ONE)
                .is_some());
        }
    }

    // -- Logistic via factory -------------------------------------------------

    #[cfg(feature = "logistic")]
    mod logistic_tests {
        use super::*;

        #[test]
        fn create_logistic() {
            let Ok(cfg) =
                LogisticBlendConfig::new(7e9, 1e-8, 1e-8, progress(0.7), 0.2, 0.01, 0.03)
            else {
                panic!("valid config");
            };
            let Ok(curve) = CurveFactory::create(&cfg.into()) else {
                panic!("expected Ok");
            };
            assert!(matches!(curve, CurveBox::Logistic(_)));
            assert_eq!(curve.total_supply(), 7e9);
        }
    }

    // -- Piecewise via factory ------------------------------------------------

    #[cfg(feature = "piecewise")]
    mod piecewise_tests {
        use super::*;

        #[test]
        fn create_piecewise() {
            let Ok(cfg) = PiecewiseExponentialConfig::new(
                1e6,
                progress(0.5),
                1.0,
                PhaseOneShape::Flat,
                vec![Breakpoint::new(progress(1.0), 4.0)],
            ) else {
                panic!("valid config");
            };
            let Ok(curve) = CurveFactory::create(&cfg.into()) else {
                panic!("expected Ok");
            };
            assert!(matches!(curve, CurveBox::Piecewise(_)));
            assert!((curve.price(Progress::ONE) - 4.0).abs() < 1e-12);
        }
    }

    // -- validation -----------------------------------------------------------

    #[cfg(all(feature = "power-law", feature = "serde"))]
    #[test]
    fn deserialised_config_is_revalidated() {
        let json = r#"{"kind":"power_law","total_supply":1000.0,"base_price":2.0,
            "threshold":0.5,"exponent":0.5,"amplitude":8.0}"#;
        let Ok(cfg) = serde_json::from_str::<CurveConfig>(json) else {
            panic!("json should parse");
        };
        let result = CurveFactory::create(&cfg);
        assert!(matches!(result, Err(ConfigError::InvalidParameter(_))));
    }
}
