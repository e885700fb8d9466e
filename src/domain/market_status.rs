//! Market lifecycle state and oversize-trade policy.

use core::fmt;

/// Whether a market still has supply left to sell.
///
/// `SoldOut` only blocks buys; a sell moves the market back to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarketStatus {
    /// Some supply remains (`sold_tokens < total_supply`).
    Active,
    /// The whole supply is sold.
    SoldOut,
}

impl MarketStatus {
    /// Returns `true` for [`MarketStatus::SoldOut`].
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        matches!(self, Self::SoldOut)
    }
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::SoldOut => write!(f, "SoldOut"),
        }
    }
}

/// What a market does with a request larger than it can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TradePolicy {
    /// Shrink the request to the feasible maximum, then price it.
    #[default]
    Clamp,
    /// Fail with `TradeError::Infeasible`.
    Reject,
}
