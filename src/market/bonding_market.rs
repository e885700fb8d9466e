//! Stateful bonding-curve market.
//!
//! A [`BondingMarket`] pairs one curve with a running `sold_tokens`
//! cursor.  Quotes integrate the curve between the current cursor and the
//! cursor after the trade; committing a trade moves the cursor to the
//! quote's resulting supply.
//!
//! # Token Granularity
//!
//! The cursor is held as integer [`BaseUnits`] at the configured
//! `token_decimals`.  Trade amounts are rounded to the nearest base unit
//! once, on entry, so `buy(t)` followed by `sell(t)` restores the cursor
//! exactly.  Budget inversion resolves to a single base unit.
//!
//! # Lifecycle
//!
//! ```text
//!            buy (remaining > 0)             sell
//!   Active ──────────────────────▶ SoldOut ───────▶ Active
//!     ▲ │                                             │
//!     └─┘ buy / sell                                  ▼
//! ```
//!
//! `SoldOut` blocks buys only.  Oversized requests are clamped to what is
//! available under [`TradePolicy::Clamp`] and rejected under
//! [`TradePolicy::Reject`].

use crate::config::MarketConfig;
use crate::curves::CurveBox;
use crate::domain::{BaseUnits, MarketStatus, Progress, Quote, TokenScale, TradePolicy};
use crate::error::{ConfigError, Error, TradeError};
use crate::math::{bisect_below, Integrator};
use crate::traits::CurveShape;

/// A bonding-curve market over any [`CurveShape`].
///
/// # Examples
///
/// ```
/// use bonding_curve::config::{MarketConfig, ThresholdPowerLawConfig};
/// use bonding_curve::curves::ThresholdPowerLawCurve;
/// use bonding_curve::domain::Progress;
/// use bonding_curve::market::BondingMarket;
/// use bonding_curve::traits::FromConfig;
///
/// let cfg = ThresholdPowerLawConfig::new(1_000.0, 2.0, Progress::new(0.5).expect("ok"), 2.0, 8.0)
///     .expect("valid");
/// let curve = ThresholdPowerLawCurve::from_config(&cfg).expect("monotone");
/// let mut market = BondingMarket::new(curve, MarketConfig::default()).expect("valid");
///
/// let quote = market.buy(100.0).expect("buy ok");
/// assert!((quote.sol_amount() - 200.0).abs() < 1e-9);
/// assert_eq!(market.sold_tokens(), 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct BondingMarket<C: CurveShape = CurveBox> {
    curve: C,
    config: MarketConfig,
    integrator: Integrator,
    scale: TokenScale,
    total_units: BaseUnits,
    sold_units: BaseUnits,
}

/// A priced trade together with the cursor it leads to.
struct Fill {
    quote: Quote,
    resulting: BaseUnits,
}

impl<C: CurveShape> BondingMarket<C> {
    /// Opens a fresh market with nothing sold.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `config` is invalid or
    /// the curve's total supply is not a positive number of base units.
    pub fn new(curve: C, config: MarketConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let integrator = Integrator::new(config.quadrature)?;
        let scale = TokenScale::new(config.token_decimals)?;
        let total_units = scale
            .to_units(curve.total_supply())
            .filter(|units| !units.is_zero())
            .ok_or(ConfigError::InvalidParameter(
                "total supply must be a positive number of base units",
            ))?;
        Ok(Self {
            curve,
            config,
            integrator,
            scale,
            total_units,
            sold_units: BaseUnits::ZERO,
        })
    }

    /// Opens a market whose cursor already sits at `sold_tokens`, rounded
    /// to the nearest base unit.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if `config` is invalid.
    /// - [`Error::Trade`] with [`TradeError::InvalidAmount`] if
    ///   `sold_tokens` is not within `[0, total_supply]`.
    pub fn with_sold_tokens(curve: C, config: MarketConfig, sold_tokens: f64) -> Result<Self, Error> {
        let mut market = Self::new(curve, config)?;
        let sold_units = market
            .scale
            .to_units(sold_tokens)
            .filter(|units| *units <= market.total_units)
            .ok_or(TradeError::InvalidAmount(
                "sold tokens must lie within [0, total supply]",
            ))?;
        market.sold_units = sold_units;
        Ok(market)
    }

    // -- accessors ------------------------------------------------------------

    /// Returns the curve this market prices against.
    #[must_use]
    pub const fn curve(&self) -> &C {
        &self.curve
    }

    /// Returns the market settings.
    #[must_use]
    pub const fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Returns the token scale derived from `token_decimals`.
    #[must_use]
    pub const fn scale(&self) -> &TokenScale {
        &self.scale
    }

    /// Returns the curve's total supply.
    #[must_use]
    pub fn total_supply(&self) -> f64 {
        self.curve.total_supply()
    }

    /// Returns the number of tokens currently sold.
    #[must_use]
    pub fn sold_tokens(&self) -> f64 {
        self.tokens(self.sold_units)
    }

    /// Returns the cursor in base units.
    pub const fn sold_units(&self) -> BaseUnits {
        self.sold_units
    }

    /// Returns the number of tokens still available to buy.
    #[must_use]
    pub fn remaining_tokens(&self) -> f64 {
        self.tokens(self.remaining_units())
    }

    /// Returns the fraction of supply sold.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress_at(self.sold_units)
    }

    /// Returns [`MarketStatus::SoldOut`] once the whole supply is sold.
    #[must_use]
    pub fn status(&self) -> MarketStatus {
        if self.sold_units >= self.total_units {
            MarketStatus::SoldOut
        } else {
            MarketStatus::Active
        }
    }

    /// Returns the marginal price at the current cursor.
    #[must_use]
    pub fn spot_price(&self) -> f64 {
        self.curve.price(self.progress())
    }

    // -- quotes ---------------------------------------------------------------

    /// Prices buying `tokens` from the current cursor without committing.
    ///
    /// # Errors
    ///
    /// - [`TradeError::InvalidAmount`] if `tokens` is not finite and
    ///   positive, or rounds to zero base units.
    /// - [`TradeError::Infeasible`] if the market is sold out, or if
    ///   `tokens` exceeds the remaining supply under
    ///   [`TradePolicy::Reject`].
    /// - Any integration error.
    pub fn quote_buy(&self, tokens: f64) -> Result<Quote, TradeError> {
        self.fill_buy(tokens).map(|fill| fill.quote)
    }

    /// Prices selling `tokens` back to the curve without committing.
    ///
    /// # Errors
    ///
    /// - [`TradeError::InvalidAmount`] if `tokens` is not finite and
    ///   positive, or rounds to zero base units.
    /// - [`TradeError::Infeasible`] if nothing has been sold, or if
    ///   `tokens` exceeds the sold amount under [`TradePolicy::Reject`].
    /// - Any integration error.
    pub fn quote_sell(&self, tokens: f64) -> Result<Quote, TradeError> {
        self.fill_sell(tokens).map(|fill| fill.quote)
    }

    /// Finds the largest token amount whose cost fits within `sol_budget`.
    ///
    /// Uses bisection over `[0, remaining]` in base units; one more base
    /// unit than the returned amount costs more than the budget.
    ///
    /// # Errors
    ///
    /// - [`TradeError::InvalidAmount`] if the budget is not finite and
    ///   positive.
    /// - [`TradeError::Infeasible`] if the market is sold out, if the
    ///   budget exceeds the cost of the whole remainder under
    ///   [`TradePolicy::Reject`], or if it cannot buy a single base unit.
    /// - Any integration error.
    pub fn buy_for_budget(&self, sol_budget: f64) -> Result<Quote, TradeError> {
        self.fill_budget(sol_budget).map(|fill| fill.quote)
    }

    /// Returns the revenue of selling the whole supply from zero.
    ///
    /// # Errors
    ///
    /// Any integration error.
    pub fn total_raise_at_full_sale(&self) -> Result<f64, TradeError> {
        self.integrator
            .integrate(&self.curve, Progress::ZERO, Progress::ONE)
    }

    // -- commits --------------------------------------------------------------

    /// Buys `tokens`, moving the cursor to the quote's resulting supply.
    ///
    /// # Errors
    ///
    /// Same as [`quote_buy`](Self::quote_buy); nothing changes on error.
    pub fn buy(&mut self, tokens: f64) -> Result<Quote, TradeError> {
        let fill = self.fill_buy(tokens)?;
        Ok(self.commit("buy", fill))
    }

    /// Sells `tokens`, moving the cursor back.
    ///
    /// # Errors
    ///
    /// Same as [`quote_sell`](Self::quote_sell); nothing changes on error.
    pub fn sell(&mut self, tokens: f64) -> Result<Quote, TradeError> {
        let fill = self.fill_sell(tokens)?;
        Ok(self.commit("sell", fill))
    }

    /// Spends up to `sol_budget` and commits the resulting buy.
    ///
    /// # Errors
    ///
    /// Same as [`buy_for_budget`](Self::buy_for_budget).
    pub fn buy_with_budget(&mut self, sol_budget: f64) -> Result<Quote, TradeError> {
        let fill = self.fill_budget(sol_budget)?;
        Ok(self.commit("buy", fill))
    }

    // -- internals ------------------------------------------------------------

    fn fill_buy(&self, tokens: f64) -> Result<Fill, TradeError> {
        let requested = self.requested_units(tokens, "buy amount must be finite and positive")?;
        if self.status().is_sold_out() {
            return Err(TradeError::Infeasible("market is sold out"));
        }
        let amount = self.clamp(
            requested,
            self.remaining_units(),
            "buy amount exceeds remaining supply",
        )?;
        self.buy_units(amount)
    }

    fn fill_sell(&self, tokens: f64) -> Result<Fill, TradeError> {
        let requested = self.requested_units(tokens, "sell amount must be finite and positive")?;
        if self.sold_units.is_zero() {
            return Err(TradeError::Infeasible("nothing has been sold"));
        }
        let amount = self.clamp(requested, self.sold_units, "sell amount exceeds sold supply")?;
        let resulting = self
            .sold_units
            .checked_sub(&amount)
            .ok_or(TradeError::InvalidAmount("sell amount exceeds sold supply"))?;
        let proceeds = self.integrator.integrate(
            &self.curve,
            self.progress_at(resulting),
            self.progress_at(self.sold_units),
        )?;
        self.fill(amount, proceeds, resulting)
    }

    fn fill_budget(&self, sol_budget: f64) -> Result<Fill, TradeError> {
        let budget = positive(sol_budget, "budget must be finite and positive")?;
        if self.status().is_sold_out() {
            return Err(TradeError::Infeasible("market is sold out"));
        }

        let remaining = self.remaining_units();
        let full = self.buy_units(remaining)?;
        if full.quote.sol_amount() <= budget {
            return match self.config.policy {
                TradePolicy::Reject if full.quote.sol_amount() < budget => Err(
                    TradeError::Infeasible("budget exceeds the cost of the remaining supply"),
                ),
                _ => Ok(full),
            };
        }

        let bracket = bisect_below(
            0,
            remaining.get(),
            budget,
            self.config.max_bisection_iterations,
            |units| {
                self.buy_units(BaseUnits::new(units))
                    .map(|fill| fill.quote.sol_amount())
            },
        )?;
        if bracket.low == 0 {
            return Err(TradeError::Infeasible(
                "budget cannot buy a single base unit",
            ));
        }
        self.buy_units(BaseUnits::new(bracket.low))
    }

    /// Prices buying `amount <= remaining` base units.
    fn buy_units(&self, amount: BaseUnits) -> Result<Fill, TradeError> {
        let resulting = self
            .sold_units
            .checked_add(&amount)
            .filter(|units| *units <= self.total_units)
            .ok_or(TradeError::InvalidAmount("buy amount exceeds remaining supply"))?;
        let cost = self.integrator.integrate(
            &self.curve,
            self.progress_at(self.sold_units),
            self.progress_at(resulting),
        )?;
        self.fill(amount, cost, resulting)
    }

    fn fill(&self, amount: BaseUnits, sol: f64, resulting: BaseUnits) -> Result<Fill, TradeError> {
        let quote = Quote::new(self.tokens(amount), sol, self.tokens(resulting))?;
        Ok(Fill { quote, resulting })
    }

    fn requested_units(&self, tokens: f64, reason: &'static str) -> Result<BaseUnits, TradeError> {
        let tokens = positive(tokens, reason)?;
        match self.scale.to_units(tokens) {
            Some(units) if !units.is_zero() => Ok(units),
            Some(_) => Err(TradeError::InvalidAmount(
                "amount is smaller than one base unit",
            )),
            // Larger than any cursor: clamped or rejected like any oversize request.
            None => Ok(BaseUnits::new(u128::MAX)),
        }
    }

    fn remaining_units(&self) -> BaseUnits {
        self.total_units
            .checked_sub(&self.sold_units)
            .unwrap_or(BaseUnits::ZERO)
    }

    /// Whole supply maps back to `total_supply` exactly.
    fn tokens(&self, units: BaseUnits) -> f64 {
        if units == self.total_units {
            self.total_supply()
        } else {
            self.scale.to_tokens(units)
        }
    }

    fn progress_at(&self, units: BaseUnits) -> Progress {
        Progress::saturating(units.as_f64() / self.total_units.as_f64())
    }

    fn clamp(
        &self,
        requested: BaseUnits,
        available: BaseUnits,
        reason: &'static str,
    ) -> Result<BaseUnits, TradeError> {
        if requested <= available {
            return Ok(requested);
        }
        match self.config.policy {
            TradePolicy::Clamp => Ok(available),
            TradePolicy::Reject => Err(TradeError::Infeasible(reason)),
        }
    }

    fn commit(&mut self, side: &'static str, fill: Fill) -> Quote {
        self.sold_units = fill.resulting;
        let quote = fill.quote;
        tracing::debug!(
            side,
            tokens = quote.token_amount(),
            sol = quote.sol_amount(),
            resulting_supply = quote.resulting_supply(),
            "trade committed"
        );
        quote
    }
}

fn positive(value: f64, reason: &'static str) -> Result<f64, TradeError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TradeError::InvalidAmount(reason));
    }
    Ok(value)
}
