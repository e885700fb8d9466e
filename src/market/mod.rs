//! Stateful trading against a curve.
//!
//! [`BondingMarket`] owns a curve and the running sold-token cursor, and
//! turns token amounts or budgets into priced [`Quote`](crate::domain::Quote)s.

mod bonding_market;

#[cfg(all(test, feature = "all-curves"))]
mod proptest_properties;

pub use bonding_market::BondingMarket;
