use crate::domain::errors::ValidationError;

/// Number of shares in a single trade. Always positive: a buy or sell of
/// zero shares is rejected at construction, so ledger operations only ever
/// see meaningful trade sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u32);

impl ShareCount {
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::MustBePositive);
        }
        Ok(ShareCount(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}
