//! Normalized sale progress.

use core::fmt;

use crate::error::Error;

/// Fraction of the total supply that has been sold, in `[0, 1]`.
///
/// Every curve is expressed as a function of progress rather than of raw
/// token counts, which keeps shape parameters independent of the supply
/// size.  The integrator scales results back by the total supply.
///
/// # Examples
///
/// ```
/// use bonding_curve::domain::Progress;
///
/// let p = Progress::from_tokens(4.83e9, 7e9).expect("within supply");
/// assert!((p.get() - 0.69).abs() < 1e-12);
///
/// let q = Progress::from_percent(70.0).expect("valid percent");
/// assert!((q.get() - 0.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Progress(f64);

impl Progress {
    /// Nothing sold.
    pub const ZERO: Self = Self(0.0);

    /// Whole supply sold.
    pub const ONE: Self = Self(1.0);

    /// Creates a `Progress` from a fraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProgress`] if `value` is not finite or lies
    /// outside `[0, 1]`.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidProgress(value));
        }
        Ok(Self(value))
    }

    /// Creates a `Progress`, clamping into `[0, 1]`.  `NaN` maps to zero.
    #[must_use]
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Converts a sold-token count into progress.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProgress`] if `total_supply` is not a
    /// positive finite number or `sold` is outside `[0, total_supply]`.
    pub fn from_tokens(sold: f64, total_supply: f64) -> crate::error::Result<Self> {
        if !total_supply.is_finite() || total_supply <= 0.0 {
            return Err(Error::InvalidProgress(f64::NAN));
        }
        Self::new(sold / total_supply)
    }

    /// Converts a percentage in `[0, 100]` into progress.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProgress`] if the percentage is out of range.
    pub fn from_percent(percent: f64) -> crate::error::Result<Self> {
        Self::new(percent / 100.0)
    }

    /// Returns the underlying fraction.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns the progress as a percentage.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Returns the number of tokens this progress represents.
    #[must_use]
    pub fn tokens(&self, total_supply: f64) -> f64 {
        self.0 * total_supply
    }
}

impl TryFrom<f64> for Progress {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}
