use thiserror::Error;

/// Failures surfaced by ledger operations.
///
/// Every variant is a local validation failure: the operation rejects before
/// mutating anything, so the ledger a caller observes after an error is the
/// ledger it had before the call. Intended to be caught and rendered as a
/// user-facing notification.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    #[error("insufficient funds: required {required:.2}, available {available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("insufficient shares of {symbol}: requested {requested}, held {held}")]
    InsufficientShares {
        symbol: String,
        requested: u32,
        held: u32,
    },

    #[error("no position held for symbol: {symbol}")]
    PositionNotFound { symbol: String },

    #[error("invalid price: {0}")]
    InvalidPrice(#[from] ValidationError),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("value must be non-negative")]
    MustBeNonNegative,

    #[error("value must be positive")]
    MustBePositive,

    #[error("value must be finite")]
    MustBeFinite,

    #[error("state invariant violated: {0}")]
    InvariantViolated(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_message() {
        let err = LedgerError::InsufficientFunds {
            required: 1826.3,
            available: 1000.0,
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: required 1826.30, available 1000.00"
        );
    }

    #[test]
    fn test_insufficient_shares_message() {
        let err = LedgerError::InsufficientShares {
            symbol: "AAPL".to_string(),
            requested: 10,
            held: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient shares of AAPL: requested 10, held 5"
        );
    }

    #[test]
    fn test_position_not_found_message() {
        let err = LedgerError::PositionNotFound {
            symbol: "MSFT".to_string(),
        };
        assert_eq!(err.to_string(), "no position held for symbol: MSFT");
    }

    #[test]
    fn test_validation_error_converts_to_ledger_error() {
        let err: LedgerError = ValidationError::MustBeFinite.into();
        assert!(matches!(err, LedgerError::InvalidPrice(_)));
    }
}
