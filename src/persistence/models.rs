//! Stored snapshot formats for the app_state table.
//!
//! These are the JSON documents written under the fixed storage keys. They
//! are separate from the domain types so the storage format can stay stable
//! while the in-memory representation evolves.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::position::{Position, TradeKind, Transaction};
use crate::domain::errors::ValidationError;
use crate::domain::services::portfolio_ledger::PortfolioLedger;
use crate::domain::services::progress_tracker::{ProgressTracker, RewardSchedule};

/// Persisted form of the full progress record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProgress {
    pub points: u32,
    pub level: u32,
    pub completed_quizzes: BTreeSet<String>,
    pub completed_modules: BTreeSet<String>,
    pub earned_badges: BTreeSet<String>,
}

impl From<&ProgressTracker> for StoredProgress {
    fn from(tracker: &ProgressTracker) -> Self {
        Self {
            points: tracker.points(),
            level: tracker.level(),
            completed_quizzes: tracker.completed_quizzes().clone(),
            completed_modules: tracker.completed_modules().clone(),
            earned_badges: tracker.earned_badges().clone(),
        }
    }
}

impl StoredProgress {
    /// Rebuild the tracker. The level is re-derived from the points rather
    /// than trusted from storage.
    pub fn into_tracker(self, rewards: RewardSchedule) -> ProgressTracker {
        ProgressTracker::from_parts(
            self.points,
            self.completed_quizzes,
            self.completed_modules,
            self.earned_badges,
            rewards,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoredTradeKind {
    Buy,
    Sell,
}

impl From<TradeKind> for StoredTradeKind {
    fn from(kind: TradeKind) -> Self {
        match kind {
            TradeKind::Buy => StoredTradeKind::Buy,
            TradeKind::Sell => StoredTradeKind::Sell,
        }
    }
}

impl From<StoredTradeKind> for TradeKind {
    fn from(kind: StoredTradeKind) -> Self {
        match kind {
            StoredTradeKind::Buy => TradeKind::Buy,
            StoredTradeKind::Sell => TradeKind::Sell,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTransaction {
    pub kind: StoredTradeKind,
    pub executed_at: DateTime<Utc>,
    pub shares: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPosition {
    pub symbol: String,
    pub shares: u32,
    pub average_price: f64,
    pub total_value: f64,
    pub transactions: Vec<StoredTransaction>,
}

impl From<&Position> for StoredPosition {
    fn from(position: &Position) -> Self {
        Self {
            symbol: position.symbol.clone(),
            shares: position.shares,
            average_price: position.average_price,
            total_value: position.total_value,
            transactions: position
                .transactions
                .iter()
                .map(|t| StoredTransaction {
                    kind: t.kind.into(),
                    executed_at: t.executed_at,
                    shares: t.shares,
                    price: t.price,
                })
                .collect(),
        }
    }
}

impl From<StoredPosition> for Position {
    fn from(stored: StoredPosition) -> Self {
        Position {
            symbol: stored.symbol,
            shares: stored.shares,
            average_price: stored.average_price,
            total_value: stored.total_value,
            transactions: stored
                .transactions
                .into_iter()
                .map(|t| Transaction {
                    kind: t.kind.into(),
                    executed_at: t.executed_at,
                    shares: t.shares,
                    price: t.price,
                })
                .collect(),
        }
    }
}

/// Persisted form of the portfolio ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPortfolio {
    pub cash: f64,
    pub positions: Vec<StoredPosition>,
}

impl From<&PortfolioLedger> for StoredPortfolio {
    fn from(ledger: &PortfolioLedger) -> Self {
        let mut positions: Vec<StoredPosition> =
            ledger.positions().values().map(StoredPosition::from).collect();
        positions.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Self {
            cash: ledger.cash(),
            positions,
        }
    }
}

impl StoredPortfolio {
    /// Rebuild the ledger, re-checking its invariants against the stored data.
    pub fn into_ledger(self) -> Result<PortfolioLedger, ValidationError> {
        let positions: HashMap<String, Position> = self
            .positions
            .into_iter()
            .map(|p| (p.symbol.clone(), Position::from(p)))
            .collect();
        PortfolioLedger::from_parts(self.cash, positions)
    }
}
