//! Integer token amounts and the decimal scale that maps them to tokens.

use core::fmt;

use crate::error::ConfigError;

/// A token amount in the smallest indivisible unit.
///
/// The market keeps its cursor in base units so that adding and then
/// subtracting the same amount restores it bit for bit.  Arithmetic is
/// checked and returns `None` on overflow or underflow.
///
/// # Examples
///
/// ```
/// use bonding_curve::domain::BaseUnits;
///
/// let sold = BaseUnits::new(100_000);
/// let trade = BaseUnits::new(200_000);
/// let after = sold.checked_add(&trade).expect("no overflow");
/// assert_eq!(after.checked_sub(&trade), Some(sold));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct BaseUnits(u128);

impl BaseUnits {
    /// Zero units.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a raw unit count.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw unit count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` for zero units.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for BaseUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed-point scale between whole tokens and [`BaseUnits`]:
/// one token is `10^decimals` units.
///
/// # Examples
///
/// ```
/// use bonding_curve::domain::{BaseUnits, TokenScale};
///
/// let scale = TokenScale::new(6).expect("valid decimals");
/// assert_eq!(scale.to_units(0.1), Some(BaseUnits::new(100_000)));
/// assert_eq!(scale.to_tokens(BaseUnits::new(2_500_000)), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenScale {
    decimals: u32,
    factor: f64,
}

impl TokenScale {
    /// Largest supported number of decimals.
    pub const MAX_DECIMALS: u32 = 18;

    /// Scaled values at or above `2^127` units are not representable.
    const UNIT_LIMIT: f64 = 1.701_411_834_604_692_3e38;

    /// Creates a scale with `decimals` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `decimals` exceeds
    /// [`Self::MAX_DECIMALS`].
    pub fn new(decimals: u32) -> Result<Self, ConfigError> {
        if decimals > Self::MAX_DECIMALS {
            return Err(ConfigError::InvalidParameter(
                "token decimals must not exceed 18",
            ));
        }
        #[allow(clippy::cast_possible_wrap)]
        let factor = 10_f64.powi(decimals as i32);
        Ok(Self { decimals, factor })
    }

    /// Returns the number of fractional digits.
    #[must_use]
    pub const fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Returns the size of one base unit in tokens.
    #[must_use]
    pub fn unit(&self) -> f64 {
        1.0 / self.factor
    }

    /// Converts a token amount to the nearest whole number of base units.
    ///
    /// Returns `None` for negative, non-finite or unrepresentably large
    /// amounts.
    #[must_use]
    pub fn to_units(&self, tokens: f64) -> Option<BaseUnits> {
        let scaled = (tokens * self.factor).round();
        if !scaled.is_finite() || scaled < 0.0 || scaled >= Self::UNIT_LIMIT {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(BaseUnits(scaled as u128))
    }

    /// Converts base units back to tokens.
    #[must_use]
    pub fn to_tokens(&self, units: BaseUnits) -> f64 {
        units.as_f64() / self.factor
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn scale(decimals: u32) -> TokenScale {
        let Ok(s) = TokenScale::new(decimals) else {
            panic!("valid decimals");
        };
        s
    }

    // -- BaseUnits ------------------------------------------------------------

    #[test]
    fn checked_arithmetic() {
        let a = BaseUnits::new(5);
        assert_eq!(a.checked_add(&BaseUnits::new(7)), Some(BaseUnits::new(12)));
        assert_eq!(a.checked_sub(&BaseUnits::new(6)), None);
        assert_eq!(
            BaseUnits::new(u128::MAX).checked_add(&BaseUnits::new(1)),
            None
        );
    }

    #[test]
    fn zero_and_display() {
        assert!(BaseUnits::ZERO.is_zero());
        assert_eq!(BaseUnits::default(), BaseUnits::ZERO);
        assert_eq!(format!("{}", BaseUnits::new(1_000_000)), "1000000");
    }

    // -- TokenScale -----------------------------------------------------------

    #[test]
    fn rejects_too_many_decimals() {
        assert!(TokenScale::new(19).is_err());
        assert!(TokenScale::new(18).is_ok());
    }

    #[test]
    fn unit_size() {
        assert_eq!(scale(6).unit(), 1e-6);
        assert_eq!(scale(0).unit(), 1.0);
    }

    #[test]
    fn rounds_to_nearest_unit() {
        let s = scale(6);
        assert_eq!(s.to_units(0.1), Some(BaseUnits::new(100_000)));
        assert_eq!(s.to_units(0.2), Some(BaseUnits::new(200_000)));
        assert_eq!(s.to_units(1.4e-7), Some(BaseUnits::ZERO));
        assert_eq!(s.to_units(7.9e9), Some(BaseUnits::new(7_900_000_000_000_000)));
    }

    #[test]
    fn rejects_unrepresentable_amounts() {
        let s = scale(6);
        for tokens in [-1.0, f64::NAN, f64::INFINITY, 1e40] {
            assert_eq!(s.to_units(tokens), None);
        }
    }

    #[test]
    fn whole_tokens_convert_back_exactly() {
        let s = scale(6);
        let Some(units) = s.to_units(5.53e9) else {
            panic!("representable");
        };
        assert_eq!(s.to_tokens(units), 5.53e9);
    }
}
