//! Port for the external stock-data provider.

use crate::domain::entities::stock::StockRecord;

/// Read-only access to the stock catalog.
///
/// The ledger touches only `symbol` and `price` at transaction time;
/// everything else in a record is presentation data. Tests inject
/// deterministic implementations so trade arithmetic is exact.
pub trait QuoteSource: Send + Sync {
    /// Look up the catalog record for a symbol
    fn quote(&self, symbol: &str) -> Option<&StockRecord>;

    /// All records the provider supplies
    fn records(&self) -> &[StockRecord];
}
