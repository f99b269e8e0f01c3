//! End-to-end session tests: the full learner flow over a shared state
//! store, including a price move between sessions.

use finquest::application::session::LearningSession;
use finquest::config::AppConfig;
use finquest::domain::value_objects::shares::ShareCount;
use finquest::domain::repositories::quote_source::QuoteSource;
use finquest::infrastructure::catalog::static_quotes::StaticQuoteCatalog;
use finquest::persistence::init_database;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finquest=debug".into()),
        )
        .try_init();
}

fn shares(n: u32) -> ShareCount {
    ShareCount::new(n).unwrap()
}

/// Rebuild the sample catalog with one symbol repriced, simulating a market
/// move between two application runs.
fn catalog_with_price(symbol: &str, price: f64) -> StaticQuoteCatalog {
    let records = StaticQuoteCatalog::sample()
        .records()
        .iter()
        .cloned()
        .map(|mut record| {
            if record.symbol == symbol {
                record.price = price;
            }
            record
        })
        .collect();
    StaticQuoteCatalog::new(records)
}

#[tokio::test]
async fn test_full_learner_flow() {
    init_tracing();

    let pool = init_database("sqlite::memory:").await.unwrap();
    let mut session = LearningSession::with_pool(
        AppConfig::default(),
        Box::new(StaticQuoteCatalog::sample()),
        pool,
    )
    .unwrap();

    // Trade
    session.buy_stock("AAPL", shares(10)).unwrap();
    session.buy_stock("TSLA", shares(4)).unwrap();
    assert!((session.ledger().cash() - (10_000.0 - 1_826.30 - 972.72)).abs() < 1e-6);

    let perf = session.performance();
    assert!((perf.total_invested - 2_799.02).abs() < 1e-6);
    assert!((perf.current_value - 2_799.02).abs() < 1e-6);
    assert_eq!(perf.profit_loss_percent, 0.0);

    // Learn
    assert!(session.record_quiz_score("stocks-101", 9, 10));
    assert!(session.complete_module("investing"));
    assert!(session.earn_badge("first-quiz"));
    // 10 completion + 5 high-score bonus + 20 module + 10/5 badge bonus
    assert_eq!(session.progress().points(), 37);
    assert_eq!(session.progress().level(), 1);

    session.save().await.unwrap();
    assert!((session.portfolio_value() - 10_000.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_restore_and_sell_after_price_move() {
    init_tracing();

    let pool = init_database("sqlite::memory:").await.unwrap();

    // First run: buy 10 AAPL at 182.63 and persist
    let mut first = LearningSession::with_pool(
        AppConfig::default(),
        Box::new(StaticQuoteCatalog::sample()),
        pool.clone(),
    )
    .unwrap();
    first.buy_stock("AAPL", shares(10)).unwrap();
    assert!((first.ledger().cash() - 8_173.70).abs() < 1e-6);
    first.save().await.unwrap();
    drop(first);

    // Second run: AAPL has moved to 190.00; restore and sell half
    let mut second = LearningSession::with_pool(
        AppConfig::default(),
        Box::new(catalog_with_price("AAPL", 190.00)),
        pool,
    )
    .unwrap();
    second.restore().await.unwrap();

    let position = second.ledger().position("AAPL").unwrap();
    assert_eq!(position.shares, 10);
    assert_eq!(position.average_price, 182.63);

    let realized = second.sell_stock("AAPL", shares(5)).unwrap();
    assert!((realized - 36.85).abs() < 1e-6);
    assert!((second.ledger().cash() - 9_123.70).abs() < 1e-6);

    let position = second.ledger().position("AAPL").unwrap();
    assert_eq!(position.shares, 5);
    assert_eq!(position.average_price, 182.63);

    let perf = second.performance();
    assert!((perf.total_invested - 913.15).abs() < 1e-6); // 5 × 182.63
    assert!((perf.current_value - 950.00).abs() < 1e-6); // 5 × 190.00
    assert!(perf.profit_loss > 0.0);
}

#[tokio::test]
async fn test_failed_trades_leave_session_consistent() {
    init_tracing();

    let pool = init_database("sqlite::memory:").await.unwrap();
    let mut session = LearningSession::with_pool(
        AppConfig::default(),
        Box::new(StaticQuoteCatalog::sample()),
        pool,
    )
    .unwrap();

    // Far more MSFT than the starting cash can cover
    assert!(session.buy_stock("MSFT", shares(100)).is_err());
    // Nothing held yet
    assert!(session.sell_stock("AAPL", shares(1)).is_err());
    // Not in the catalog at all
    assert!(session.buy_stock("WXYZ", shares(1)).is_err());

    assert_eq!(session.ledger().cash(), 10_000.0);
    assert_eq!(session.ledger().position_count(), 0);
    assert!(session.ledger().validate_invariants().is_ok());
}
