//! PortfolioLedger - virtual cash-and-holdings state machine
//!
//! Every operation validates before it mutates: a rejected buy or sell
//! leaves the ledger exactly as the caller last observed it.

use std::collections::HashMap;

use tracing::info;

use crate::domain::entities::position::Position;
use crate::domain::entities::stock::StockRecord;
use crate::domain::errors::{LedgerError, ValidationError};
use crate::domain::value_objects::{price::Price, shares::ShareCount};

/// Derived performance metrics relative to invested capital
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioPerformance {
    /// Σ average_price × shares across holdings
    pub total_invested: f64,
    /// Σ total_value across holdings
    pub current_value: f64,
    pub profit_loss: f64,
    /// Percent of invested capital; 0 when nothing is invested
    pub profit_loss_percent: f64,
}

pub struct PortfolioLedger {
    cash: f64,
    positions: HashMap<String, Position>,
}

impl PortfolioLedger {
    pub fn new(starting_cash: Price) -> Self {
        Self {
            cash: starting_cash.value(),
            positions: HashMap::new(),
        }
    }

    /// Rebuild a ledger from persisted state, re-checking invariants.
    pub fn from_parts(
        cash: f64,
        positions: HashMap<String, Position>,
    ) -> Result<Self, ValidationError> {
        let ledger = Self { cash, positions };
        ledger.validate_invariants()?;
        Ok(ledger)
    }

    /// Buy shares of a catalog stock at its current price.
    ///
    /// Fails with `InsufficientFunds` when the cost exceeds available cash.
    /// On success the cash is debited and the position is created, or merged
    /// with the existing holding under a recomputed weighted-average price.
    pub fn buy(
        &mut self,
        stock: &StockRecord,
        shares: ShareCount,
    ) -> Result<(), LedgerError> {
        let price = Price::new(stock.price)?;
        let cost = price.value() * shares.value() as f64;

        if cost > self.cash {
            return Err(LedgerError::InsufficientFunds {
                required: cost,
                available: self.cash,
            });
        }

        self.cash -= cost;
        match self.positions.get_mut(&stock.symbol) {
            Some(position) => position.apply_buy(shares, price),
            None => {
                self.positions.insert(
                    stock.symbol.clone(),
                    Position::open(&stock.symbol, shares, price),
                );
            }
        }

        info!(
            symbol = %stock.symbol,
            shares = shares.value(),
            price = price.value(),
            cash = self.cash,
            "Buy executed"
        );
        Ok(())
    }

    /// Sell shares of a held position at the given current price.
    ///
    /// Fails with `PositionNotFound` when nothing is held for the symbol and
    /// `InsufficientShares` when the requested size exceeds the holding. On
    /// success cash is credited with the proceeds; a holding reduced to zero
    /// shares is removed. The average price is never recomputed on a sell.
    ///
    /// Returns the realized P/L against the average price - a display
    /// derivation, not stored state.
    pub fn sell(
        &mut self,
        symbol: &str,
        shares: ShareCount,
        current_price: Price,
    ) -> Result<f64, LedgerError> {
        let position = self.positions.get_mut(symbol).ok_or_else(|| {
            LedgerError::PositionNotFound {
                symbol: symbol.to_string(),
            }
        })?;

        if shares.value() > position.shares {
            return Err(LedgerError::InsufficientShares {
                symbol: symbol.to_string(),
                requested: shares.value(),
                held: position.shares,
            });
        }

        let proceeds = current_price.value() * shares.value() as f64;
        let realized =
            (current_price.value() - position.average_price) * shares.value() as f64;

        position.apply_sell(shares, current_price);
        let closed = position.is_closed();
        self.cash += proceeds;
        if closed {
            self.positions.remove(symbol);
        }

        info!(
            symbol,
            shares = shares.value(),
            price = current_price.value(),
            cash = self.cash,
            realized,
            "Sell executed"
        );
        Ok(realized)
    }

    pub fn performance(&self) -> PortfolioPerformance {
        let total_invested: f64 =
            self.positions.values().map(|p| p.cost_basis()).sum();
        let current_value: f64 =
            self.positions.values().map(|p| p.total_value).sum();
        let profit_loss = current_value - total_invested;
        let profit_loss_percent = if total_invested > 0.0 {
            profit_loss / total_invested * 100.0
        } else {
            0.0
        };

        PortfolioPerformance {
            total_invested,
            current_value,
            profit_loss,
            profit_loss_percent,
        }
    }

    /// Holdings value plus cash
    pub fn portfolio_value(&self) -> f64 {
        self.positions.values().map(|p| p.total_value).sum::<f64>() + self.cash
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn position(&self, symbol: &str) -> Option<&Position> {
        self.positions.get(symbol)
    }

    pub fn positions(&self) -> &HashMap<String, Position> {
        &self.positions
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Check all ledger invariants: non-negative finite cash, no retained
    /// zero-share positions, finite non-negative position fields.
    pub fn validate_invariants(&self) -> Result<(), ValidationError> {
        if !self.cash.is_finite() {
            return Err(ValidationError::InvariantViolated(
                "cash is not finite".to_string(),
            ));
        }
        if self.cash < 0.0 {
            return Err(ValidationError::InvariantViolated(format!(
                "cash {} < 0",
                self.cash
            )));
        }

        for (symbol, position) in &self.positions {
            if position.shares == 0 {
                return Err(ValidationError::InvariantViolated(format!(
                    "zero-share position retained for {}",
                    symbol
                )));
            }
            if !position.average_price.is_finite() || position.average_price < 0.0 {
                return Err(ValidationError::InvariantViolated(format!(
                    "invalid average price {} for {}",
                    position.average_price, symbol
                )));
            }
            if !position.total_value.is_finite() || position.total_value < 0.0 {
                return Err(ValidationError::InvariantViolated(format!(
                    "invalid total value {} for {}",
                    position.total_value, symbol
                )));
            }
        }

        Ok(())
    }

    /// Drop all holdings and return to the starting cash balance
    pub fn reset(&mut self, starting_cash: Price) {
        self.cash = starting_cash.value();
        self.positions.clear();
        info!(cash = self.cash, "Portfolio reset");
    }
}
