//! State repository
//!
//! Fixed-key snapshot storage over the app_state table. Each record is one
//! JSON document; saves upsert, loads return None for never-saved keys.

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use super::models::{StoredPortfolio, StoredProgress};
use super::{DatabaseError, DbPool};

/// Storage key for the persisted progress record
pub const PROGRESS_STATE_KEY: &str = "user-progress-storage";

/// Storage key for the persisted portfolio snapshot
pub const PORTFOLIO_STATE_KEY: &str = "portfolio-storage";

pub struct StateRepository {
    pool: DbPool,
}

impl StateRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn save_progress(
        &self,
        progress: &StoredProgress,
    ) -> Result<(), DatabaseError> {
        self.put(PROGRESS_STATE_KEY, progress).await
    }

    pub async fn load_progress(&self) -> Result<Option<StoredProgress>, DatabaseError> {
        self.get(PROGRESS_STATE_KEY).await
    }

    pub async fn save_portfolio(
        &self,
        portfolio: &StoredPortfolio,
    ) -> Result<(), DatabaseError> {
        self.put(PORTFOLIO_STATE_KEY, portfolio).await
    }

    pub async fn load_portfolio(
        &self,
    ) -> Result<Option<StoredPortfolio>, DatabaseError> {
        self.get(PORTFOLIO_STATE_KEY).await
    }

    /// Delete both persisted records
    pub async fn clear(&self) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM app_state WHERE key IN (?1, ?2)")
            .bind(PROGRESS_STATE_KEY)
            .bind(PORTFOLIO_STATE_KEY)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to clear state: {}", e);
                DatabaseError::QueryError(format!("Failed to clear state: {}", e))
            })?;

        debug!("Persisted state cleared");
        Ok(())
    }

    async fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), DatabaseError> {
        let json = serde_json::to_string(value)?;

        sqlx::query(
            r#"
            INSERT INTO app_state (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE
            SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(&json)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to save state under {}: {}", key, e);
            DatabaseError::QueryError(format!("Failed to save state: {}", e))
        })?;

        debug!(key, "State saved");
        Ok(())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, DatabaseError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM app_state WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    error!("Failed to load state under {}: {}", key, e);
                    DatabaseError::QueryError(format!("Failed to load state: {}", e))
                })?;

        match row {
            Some((json,)) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::init_database;
    use std::collections::BTreeSet;

    fn sample_progress() -> StoredProgress {
        StoredProgress {
            points: 30,
            level: 1,
            completed_quizzes: BTreeSet::from(["stocks-101".to_string()]),
            completed_modules: BTreeSet::from(["budgeting".to_string()]),
            earned_badges: BTreeSet::new(),
        }
    }

    #[tokio::test]
    async fn test_load_before_save_is_none() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let repo = StateRepository::new(pool);

        assert!(repo.load_progress().await.unwrap().is_none());
        assert!(repo.load_portfolio().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_progress_save_and_load() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let repo = StateRepository::new(pool);

        let progress = sample_progress();
        repo.save_progress(&progress).await.unwrap();

        let loaded = repo.load_progress().await.unwrap().unwrap();
        assert_eq!(loaded, progress);
    }

    #[tokio::test]
    async fn test_save_overwrites_under_fixed_key() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let repo = StateRepository::new(pool);

        repo.save_progress(&sample_progress()).await.unwrap();

        let mut updated = sample_progress();
        updated.points = 120;
        updated.level = 2;
        repo.save_progress(&updated).await.unwrap();

        let loaded = repo.load_progress().await.unwrap().unwrap();
        assert_eq!(loaded.points, 120);
    }

    #[tokio::test]
    async fn test_portfolio_save_and_load() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let repo = StateRepository::new(pool);

        let portfolio = StoredPortfolio {
            cash: 8_173.70,
            positions: vec![],
        };
        repo.save_portfolio(&portfolio).await.unwrap();

        let loaded = repo.load_portfolio().await.unwrap().unwrap();
        assert_eq!(loaded, portfolio);
    }

    #[tokio::test]
    async fn test_clear_removes_both_records() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let repo = StateRepository::new(pool);

        repo.save_progress(&sample_progress()).await.unwrap();
        repo.save_portfolio(&StoredPortfolio {
            cash: 10_000.0,
            positions: vec![],
        })
        .await
        .unwrap();

        repo.clear().await.unwrap();

        assert!(repo.load_progress().await.unwrap().is_none());
        assert!(repo.load_portfolio().await.unwrap().is_none());
    }
}
