pub mod badge_catalog;
pub mod portfolio_ledger;
pub mod progress_tracker;
