//! Curve instantiation via the factory pattern.
//!
//! The [`CurveFactory`] creates curves from [`CurveConfig`] values,
//! validating configuration and dispatching to the matching curve
//! constructor based on the config variant.
//!
//! # Usage
//!
//! ```rust
//! use bonding_curve::config::{Breakpoint, CurveConfig, PhaseOneShape, PiecewiseExponentialConfig};
//! use bonding_curve::domain::Progress;
//! use bonding_curve::factory::CurveFactory;
//! use bonding_curve::traits::CurveShape;
//!
//! let cfg = PiecewiseExponentialConfig::new(
//!     1e6,
//!     Progress::new(0.5).expect("ok"),
//!     1.0,
//!     PhaseOneShape::Flat,
//!     vec![Breakpoint::new(Progress::ONE, 4.0)],
//! )
//! .expect("valid");
//!
//! let curve = CurveFactory::create(&CurveConfig::Piecewise(cfg)).expect("curve created");
//! assert_eq!(curve.price(Progress::ZERO), 1.0);
//! ```
//!
//! # Feature Gating
//!
//! Each match arm is gated behind its curve's feature flag.  A config
//! variant for a disabled family yields
//! [`ConfigError::InvalidParameter`].
//!
//! [`CurveConfig`]: crate::config::CurveConfig
//! [`ConfigError::InvalidParameter`]: crate::error::ConfigError::InvalidParameter

mod default_factory;

pub use default_factory::CurveFactory;
