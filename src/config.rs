use crate::domain::services::progress_tracker::RewardSchedule;

/// Application configuration: starting cash for the virtual portfolio,
/// local storage location, and the point values for gamified operations.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Virtual cash every new portfolio starts with
    pub starting_cash: f64,

    /// SQLite URL for the local state store (e.g. "sqlite://data/finquest.db")
    pub database_url: String,

    /// Point values for quiz/module completions and badge bonuses
    pub rewards: RewardSchedule,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            starting_cash: 10_000.0,
            database_url: "sqlite://data/finquest.db".to_string(),
            rewards: RewardSchedule::default(),
        }
    }
}

impl AppConfig {
    /// Load from environment variables, falling back to defaults for
    /// anything absent or unparsable
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = AppConfig::default();

        let starting_cash = std::env::var("STARTING_CASH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.starting_cash);

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        Self {
            starting_cash,
            database_url,
            rewards: RewardSchedule::default(),
        }
    }
}
