//! FinQuest Core Library
//!
//! State engine for an educational personal-finance application: a simulated
//! stock-trading portfolio ledger and a gamified learning-progress tracker.
//! UI rendering, quiz content, and market-data generation live outside this
//! crate; the ledger and tracker own the state and its invariants.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod persistence;
