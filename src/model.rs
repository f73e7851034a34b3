//! model.rs — record types flowing through the screener pipeline.
//!
//! Each upstream feed returns a *partial* record carrying only the fields that
//! feed is responsible for; the merge step joins them by asset id into a
//! `UnifiedRecord`. All types are closed: unrecognized upstream fields are
//! dropped at deserialization instead of being carried along opaquely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque join key naming one asset across every feed.
pub type Identifier = String;

/// Authoritative record from the price feed. Defines the universe of assets:
/// no price record, no output row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceRecord {
    pub id: Identifier,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    #[serde(rename = "price_change_percentage_24h")]
    pub change_24h: Option<f64>,
    #[serde(rename = "price_change_percentage_7d_in_currency")]
    pub change_7d: Option<f64>,
    pub market_cap: Option<f64>,
    #[serde(rename = "total_volume")]
    pub volume: Option<f64>,
}

/// Partial record from the sentiment feed. Scores are on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentRecord {
    pub id: Identifier,
    pub bullish: Option<f64>,
    pub bearish: Option<f64>,
    pub mentions: Option<u64>,
}

/// Partial record from the on-chain feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainRecord {
    pub id: Identifier,
    pub liquidity: Option<f64>,
    pub holders: Option<u64>,
}

/// One catalyst alert (news item, listing, unlock, ...). Lower `rank` marks a
/// more prominent catalyst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalystAlert {
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

/// Partial record from the catalyst/news feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalystRecord {
    pub id: Identifier,
    #[serde(default)]
    pub alerts: Vec<CatalystAlert>,
}

/// Merged view of one asset across all feeds. Absent optional fields mean
/// "unknown", not zero. Built fresh on every pipeline run and never mutated
/// in place; later stages produce derived copies instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedRecord {
    pub id: Identifier,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_24h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_7d: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullish: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearish: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holders: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<CatalystAlert>,
}

impl UnifiedRecord {
    /// Record with only the mandatory price-feed fields; everything else unknown.
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        current_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            current_price,
            change_24h: None,
            change_7d: None,
            market_cap: None,
            volume: None,
            bullish: None,
            bearish: None,
            mentions: None,
            liquidity: None,
            holders: None,
            alerts: Vec::new(),
        }
    }
}

/// A `UnifiedRecord` plus its derived ranking score. Immutable once produced;
/// recomputed whenever the risk bias or the underlying record changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: UnifiedRecord,
    pub score: f64,
}
