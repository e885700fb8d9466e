//! Priced outcome of a buy or sell.

use core::fmt;

use crate::error::TradeError;

/// A priced trade: how many tokens change hands, for how much SOL, and the
/// sold supply that results.
///
/// Produced by the market both for pure quotes and for committed trades;
/// a quote is never mutated after creation.  Amounts are kept at full
/// `f64` precision; rounding for display is left to the caller.
///
/// # Invariants
///
/// - All three fields are finite and non-negative.
///
/// # Examples
///
/// ```
/// use bonding_curve::domain::Quote;
///
/// let quote = Quote::new(1_000.0, 0.5, 1_000.0).expect("valid quote");
/// assert_eq!(quote.average_price(), Some(0.0005));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    token_amount: f64,
    sol_amount: f64,
    resulting_supply: f64,
}

impl Quote {
    /// Creates a validated quote.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::NonFinite`] if any field is not finite and
    /// [`TradeError::InvalidAmount`] if any field is negative.
    pub fn new(
        token_amount: f64,
        sol_amount: f64,
        resulting_supply: f64,
    ) -> Result<Self, TradeError> {
        if !token_amount.is_finite() || !sol_amount.is_finite() || !resulting_supply.is_finite() {
            return Err(TradeError::NonFinite("quote fields must be finite"));
        }
        if token_amount < 0.0 || sol_amount < 0.0 || resulting_supply < 0.0 {
            return Err(TradeError::InvalidAmount("quote fields must be non-negative"));
        }
        Ok(Self {
            token_amount,
            sol_amount,
            resulting_supply,
        })
    }

    /// Tokens bought or sold.
    #[must_use]
    pub const fn token_amount(&self) -> f64 {
        self.token_amount
    }

    /// SOL paid (buy) or received (sell).
    #[must_use]
    pub const fn sol_amount(&self) -> f64 {
        self.sol_amount
    }

    /// Sold supply after the trade.
    #[must_use]
    pub const fn resulting_supply(&self) -> f64 {
        self.resulting_supply
    }

    /// Average execution price, `sol_amount / token_amount`.
    ///
    /// Returns `None` for a zero-token quote.
    #[must_use]
    pub fn average_price(&self) -> Option<f64> {
        if self.token_amount == 0.0 {
            return None;
        }
        Some(self.sol_amount / self.token_amount)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote(tokens={}, sol={}, supply={})",
            self.token_amount, self.sol_amount, self.resulting_supply
        )
    }
}
