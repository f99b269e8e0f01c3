//! Position entity - a holding of shares in one symbol with an average
//! cost basis and its ordered transaction history.

use crate::domain::value_objects::{price::Price, shares::ShareCount};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeKind {
    Buy,
    Sell,
}

impl std::fmt::Display for TradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeKind::Buy => write!(f, "BUY"),
            TradeKind::Sell => write!(f, "SELL"),
        }
    }
}

/// One executed trade against a position. Records are append-only.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub kind: TradeKind,
    pub executed_at: DateTime<Utc>,
    pub shares: u32,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct Position {
    pub symbol: String,
    pub shares: u32,
    /// Weighted-average price paid per share across all buys
    pub average_price: f64,
    /// shares × price of the most recent trade
    pub total_value: f64,
    pub transactions: Vec<Transaction>,
}

impl Position {
    /// Open a new holding from a first purchase.
    pub fn open(symbol: &str, shares: ShareCount, price: Price) -> Self {
        let bought = shares.value();
        let paid = price.value();
        Position {
            symbol: symbol.to_string(),
            shares: bought,
            average_price: paid,
            total_value: bought as f64 * paid,
            transactions: vec![Transaction {
                kind: TradeKind::Buy,
                executed_at: Utc::now(),
                shares: bought,
                price: paid,
            }],
        }
    }

    /// Merge an additional purchase into the holding, recomputing the
    /// average price as the weighted average of old and new cost bases.
    pub fn apply_buy(&mut self, shares: ShareCount, price: Price) {
        let bought = shares.value();
        let paid = price.value();
        let total_shares = self.shares + bought;
        let total_cost =
            self.average_price * self.shares as f64 + paid * bought as f64;
        self.average_price = total_cost / total_shares as f64;
        self.shares = total_shares;
        self.total_value = total_shares as f64 * paid;
        self.transactions.push(Transaction {
            kind: TradeKind::Buy,
            executed_at: Utc::now(),
            shares: bought,
            price: paid,
        });
    }

    /// Reduce the holding by a sale. The average price is left untouched:
    /// realized P/L is derived for display, never stored. Callers validate
    /// that `shares` does not exceed the held amount.
    pub fn apply_sell(&mut self, shares: ShareCount, price: Price) {
        let sold = shares.value();
        let current = price.value();
        self.shares -= sold;
        self.total_value = self.shares as f64 * current;
        self.transactions.push(Transaction {
            kind: TradeKind::Sell,
            executed_at: Utc::now(),
            shares: sold,
            price: current,
        });
    }

    /// Capital invested in this holding at the average price
    pub fn cost_basis(&self) -> f64 {
        self.average_price * self.shares as f64
    }

    /// A position sold down to zero shares is removed from the ledger
    pub fn is_closed(&self) -> bool {
        self.shares == 0
    }
}
