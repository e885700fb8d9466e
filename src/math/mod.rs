//! Numeric routines shared by the market and calibration.
//!
//! - [`Integrator`] computes signed, supply-scaled areas under any curve,
//!   exactly where the curve has a closed form and by Romberg-accelerated
//!   midpoint quadrature otherwise, split at the curve's breakpoints.
//! - [`bisect_below`] inverts a monotone cost function over integer base
//!   units with a bounded, bracket-preserving bisection.

mod bisection;
mod integrator;

pub use bisection::{bisect_below, Bracket};
pub use integrator::Integrator;
