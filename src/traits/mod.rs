//! Core trait abstractions.
//!
//! [`CurveShape`] is the pricing capability shared by every curve, and
//! [`FromConfig`] is the validated, configuration-driven constructor.

mod curve_shape;
mod from_config;

pub use curve_shape::CurveShape;
pub use from_config::FromConfig;
