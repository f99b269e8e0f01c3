//! Static stock catalog adapter.
//!
//! In-memory quote source backed by a fixed record list, standing in for
//! the upstream market-data provider. Records are deterministic so trade
//! arithmetic in tests and demos is exact - no generated prices here.

use crate::domain::entities::stock::StockRecord;
use crate::domain::repositories::quote_source::QuoteSource;

pub struct StaticQuoteCatalog {
    records: Vec<StockRecord>,
}

impl StaticQuoteCatalog {
    pub fn new(records: Vec<StockRecord>) -> Self {
        Self { records }
    }

    /// A small fully-populated catalog for demos and tests.
    pub fn sample() -> Self {
        Self::new(vec![
            StockRecord {
                symbol: "AAPL".to_string(),
                name: "Apple Inc.".to_string(),
                price: 182.63,
                change: 1.25,
                change_percent: 0.69,
                volume: 45_789_000,
                market_cap: 2_850_000_000_000.0,
                sector: "Technology".to_string(),
                industry: "Consumer Electronics".to_string(),
                pe_ratio: 30.2,
                book_value: 4.32,
                dividend_yield: 0.53,
                roce: 35.8,
                roe: 147.9,
                face_value: 0.00001,
                high_52_week: 198.23,
                low_52_week: 143.90,
                eps: 6.05,
                debt_to_equity: 1.76,
                current_ratio: 0.99,
                established_year: 1976,
                description: "Apple Inc. designs, manufactures, and markets \
                              smartphones, personal computers, tablets, \
                              wearables, and accessories worldwide."
                    .to_string(),
                bse_code: None,
                website: Some("apple.com".to_string()),
                promoter_holding: Some(0.0),
                key_points: Some(vec![
                    "World's most valuable technology company by market capitalization".to_string(),
                    "Services business is growing rapidly".to_string(),
                    "Strong brand loyalty and premium positioning".to_string(),
                ]),
                pros: Some(vec![
                    "Strong global brand with loyal customer base".to_string(),
                    "Growing services segment with high margins".to_string(),
                ]),
                cons: Some(vec![
                    "High dependence on iPhone for revenue".to_string(),
                    "Premium pricing vulnerable during downturns".to_string(),
                ]),
                tags: Some(vec!["Tech Giant".to_string(), "Consumer".to_string()]),
            },
            StockRecord {
                symbol: "MSFT".to_string(),
                name: "Microsoft Corporation".to_string(),
                price: 415.32,
                change: -2.18,
                change_percent: -0.52,
                volume: 23_456_000,
                market_cap: 3_100_000_000_000.0,
                sector: "Technology".to_string(),
                industry: "Software—Infrastructure".to_string(),
                pe_ratio: 36.5,
                book_value: 31.23,
                dividend_yield: 0.73,
                roce: 28.4,
                roe: 43.2,
                face_value: 0.00001,
                high_52_week: 430.82,
                low_52_week: 309.45,
                eps: 11.36,
                debt_to_equity: 0.32,
                current_ratio: 1.65,
                established_year: 1975,
                description: "Microsoft Corporation develops, licenses, and \
                              supports software, services, devices, and \
                              solutions worldwide."
                    .to_string(),
                bse_code: None,
                website: Some("microsoft.com".to_string()),
                promoter_holding: Some(0.0),
                key_points: Some(vec![
                    "Leading provider of cloud computing services through Azure".to_string(),
                    "Creator of the Windows operating system and Office suite".to_string(),
                ]),
                pros: Some(vec![
                    "Diversified revenue streams across consumer and enterprise".to_string(),
                    "Strong recurring revenue from subscriptions".to_string(),
                ]),
                cons: Some(vec![
                    "Facing increased competition in cloud services".to_string(),
                ]),
                tags: Some(vec![
                    "Tech Giant".to_string(),
                    "Cloud".to_string(),
                    "Software".to_string(),
                ]),
            },
            StockRecord {
                symbol: "TSLA".to_string(),
                name: "Tesla Inc.".to_string(),
                price: 243.18,
                change: -3.45,
                change_percent: -1.40,
                volume: 38_956_000,
                market_cap: 778_000_000_000.0,
                sector: "Consumer Discretionary".to_string(),
                industry: "Auto Manufacturers".to_string(),
                pe_ratio: 62.4,
                book_value: 37.68,
                dividend_yield: 0.0,
                roce: 14.3,
                roe: 22.9,
                face_value: 0.001,
                high_52_week: 278.98,
                low_52_week: 152.37,
                eps: 3.90,
                debt_to_equity: 0.21,
                current_ratio: 1.73,
                established_year: 2003,
                description: "Tesla, Inc. designs, develops, manufactures, \
                              sells and leases electric vehicles and energy \
                              generation and storage systems."
                    .to_string(),
                bse_code: None,
                website: Some("tesla.com".to_string()),
                promoter_holding: None,
                key_points: Some(vec![
                    "Leader in electric vehicle manufacturing and technology".to_string(),
                    "Expanding into energy generation and storage".to_string(),
                ]),
                pros: Some(vec![
                    "First-mover advantage in premium electric vehicles".to_string(),
                    "Advanced battery technology and manufacturing scale".to_string(),
                ]),
                cons: Some(vec![
                    "High valuation compared to traditional automakers".to_string(),
                    "Increasing competition from traditional automakers".to_string(),
                ]),
                tags: Some(vec![
                    "Electric Vehicles".to_string(),
                    "Energy".to_string(),
                ]),
            },
        ])
    }
}

impl QuoteSource for StaticQuoteCatalog {
    fn quote(&self, symbol: &str) -> Option<&StockRecord> {
        self.records.iter().find(|record| record.symbol == symbol)
    }

    fn records(&self) -> &[StockRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_lookup() {
        let catalog = StaticQuoteCatalog::sample();
        let record = catalog.quote("AAPL").unwrap();
        assert_eq!(record.name, "Apple Inc.");
        assert_eq!(record.price, 182.63);
    }

    #[test]
    fn test_sample_catalog_unknown_symbol() {
        let catalog = StaticQuoteCatalog::sample();
        assert!(catalog.quote("NOPE").is_none());
    }

    #[test]
    fn test_records_exposed() {
        let catalog = StaticQuoteCatalog::sample();
        assert_eq!(catalog.records().len(), 3);
    }
}
