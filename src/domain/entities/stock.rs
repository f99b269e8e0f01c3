//! Stock catalog entry supplied by the external data provider.
//!
//! The ledger reads only `symbol` and `price` at transaction time; the rest
//! of the record is descriptive data carried through for display surfaces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: f64,
    pub sector: String,
    pub industry: String,
    pub pe_ratio: f64,
    pub book_value: f64,
    pub dividend_yield: f64,
    pub roce: f64,
    pub roe: f64,
    pub face_value: f64,
    #[serde(rename = "high52Week")]
    pub high_52_week: f64,
    #[serde(rename = "low52Week")]
    pub low_52_week: f64,
    pub eps: f64,
    pub debt_to_equity: f64,
    pub current_ratio: f64,
    pub established_year: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bse_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promoter_holding: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pros: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
