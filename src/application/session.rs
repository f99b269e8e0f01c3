//! LearningSession - the application facade the UI drives
//!
//! Composes the portfolio ledger, the progress tracker, the catalogs, and
//! the state repository. Domain operations are synchronous; persistence is
//! explicit through save(), restore(), and reset().

use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::errors::{LedgerError, ValidationError};
use crate::domain::repositories::quote_source::QuoteSource;
use crate::domain::services::badge_catalog::BadgeCatalog;
use crate::domain::services::portfolio_ledger::{PortfolioLedger, PortfolioPerformance};
use crate::domain::services::progress_tracker::ProgressTracker;
use crate::domain::value_objects::{price::Price, shares::ShareCount};
use crate::persistence::models::{StoredPortfolio, StoredProgress};
use crate::persistence::repository::StateRepository;
use crate::persistence::{init_database, DatabaseError, DbPool};

/// Minimum fraction of correct answers for the quiz score bonus
const QUIZ_BONUS_THRESHOLD: f64 = 0.8;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown symbol: {symbol}")]
    UnknownSymbol { symbol: String },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] DatabaseError),
}

pub struct LearningSession {
    ledger: PortfolioLedger,
    progress: ProgressTracker,
    quotes: Box<dyn QuoteSource>,
    badges: BadgeCatalog,
    repository: StateRepository,
    config: AppConfig,
}

impl LearningSession {
    /// Open a session against the configured database URL.
    pub async fn new(
        config: AppConfig,
        quotes: Box<dyn QuoteSource>,
    ) -> Result<Self, SessionError> {
        let pool = init_database(&config.database_url).await?;
        Self::with_pool(config, quotes, pool)
    }

    /// Open a session over an existing pool. Used by tests and embedders
    /// that manage the database themselves.
    pub fn with_pool(
        config: AppConfig,
        quotes: Box<dyn QuoteSource>,
        pool: DbPool,
    ) -> Result<Self, SessionError> {
        let starting_cash = Price::new(config.starting_cash)?;
        Ok(Self {
            ledger: PortfolioLedger::new(starting_cash),
            progress: ProgressTracker::with_rewards(config.rewards.clone()),
            quotes,
            badges: BadgeCatalog::standard(),
            repository: StateRepository::new(pool),
            config,
        })
    }

    /// Buy shares of a catalog stock at its current price.
    pub fn buy_stock(
        &mut self,
        symbol: &str,
        shares: ShareCount,
    ) -> Result<(), SessionError> {
        let record = self.quotes.quote(symbol).ok_or_else(|| {
            SessionError::UnknownSymbol {
                symbol: symbol.to_string(),
            }
        })?;
        self.ledger.buy(record, shares)?;
        Ok(())
    }

    /// Sell held shares at the catalog's current price. Returns the realized
    /// P/L against the average purchase price.
    pub fn sell_stock(
        &mut self,
        symbol: &str,
        shares: ShareCount,
    ) -> Result<f64, SessionError> {
        let record = self.quotes.quote(symbol).ok_or_else(|| {
            SessionError::UnknownSymbol {
                symbol: symbol.to_string(),
            }
        })?;
        let current_price = Price::new(record.price)?;
        let realized = self.ledger.sell(symbol, shares, current_price)?;
        Ok(realized)
    }

    pub fn complete_quiz(&mut self, quiz_id: &str) -> bool {
        self.progress.complete_quiz(quiz_id)
    }

    /// Record a finished quiz with its score. Completion is idempotent, but
    /// the high-score bonus is granted on every qualifying attempt, matching
    /// the retake behavior of the quiz panel.
    pub fn record_quiz_score(
        &mut self,
        quiz_id: &str,
        correct: u32,
        total: u32,
    ) -> bool {
        let newly_completed = self.progress.complete_quiz(quiz_id);

        if total > 0 && correct as f64 / total as f64 >= QUIZ_BONUS_THRESHOLD {
            let bonus = self.config.rewards.quiz_score_bonus_points;
            self.progress.add_points(bonus as i64);
            info!(quiz_id, correct, total, bonus, "High-score bonus awarded");
        }

        newly_completed
    }

    pub fn complete_module(&mut self, module_id: &str) -> bool {
        self.progress.complete_module(module_id)
    }

    pub fn earn_badge(&mut self, badge_id: &str) -> bool {
        self.progress.earn_badge(badge_id, &self.badges)
    }

    pub fn performance(&self) -> PortfolioPerformance {
        self.ledger.performance()
    }

    pub fn portfolio_value(&self) -> f64 {
        self.ledger.portfolio_value()
    }

    pub fn ledger(&self) -> &PortfolioLedger {
        &self.ledger
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn badge_catalog(&self) -> &BadgeCatalog {
        &self.badges
    }

    pub fn quotes(&self) -> &dyn QuoteSource {
        self.quotes.as_ref()
    }

    /// Persist both records under their fixed keys.
    pub async fn save(&self) -> Result<(), SessionError> {
        self.repository
            .save_progress(&StoredProgress::from(&self.progress))
            .await?;
        self.repository
            .save_portfolio(&StoredPortfolio::from(&self.ledger))
            .await?;
        info!("Session state saved");
        Ok(())
    }

    /// Load persisted records, replacing in-memory state. Records never
    /// saved leave the corresponding store at its defaults.
    pub async fn restore(&mut self) -> Result<(), SessionError> {
        if let Some(stored) = self.repository.load_progress().await? {
            self.progress = stored.into_tracker(self.config.rewards.clone());
        }
        if let Some(stored) = self.repository.load_portfolio().await? {
            self.ledger = stored.into_ledger()?;
        }
        info!(
            points = self.progress.points(),
            cash = self.ledger.cash(),
            "Session state restored"
        );
        Ok(())
    }

    /// Explicit reset: both stores back to defaults, persisted state removed.
    pub async fn reset(&mut self) -> Result<(), SessionError> {
        self.ledger.reset(Price::new(self.config.starting_cash)?);
        self.progress.reset();
        self.repository.clear().await?;
        info!("Session reset");
        Ok(())
    }
}
