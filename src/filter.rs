//! # Filter Engine
//! Inclusive range predicates over the numeric fields of a `UnifiedRecord`
//! plus a case-insensitive substring predicate over name/symbol. Bounds arrive
//! as raw strings (form inputs); a bound that does not parse to a finite
//! number imposes no constraint, silently.

use serde::Deserialize;

use crate::model::UnifiedRecord;

/// Range and text constraints. Every field is optional; absence means "no
/// constraint on this dimension". Wire names mirror the UI query parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    #[serde(rename = "min24hChange")]
    pub min_24h_change: Option<String>,
    #[serde(rename = "max24hChange")]
    pub max_24h_change: Option<String>,
    #[serde(rename = "min7dChange")]
    pub min_7d_change: Option<String>,
    #[serde(rename = "max7dChange")]
    pub max_7d_change: Option<String>,
    pub min_volume: Option<String>,
    pub min_market_cap: Option<String>,
    pub min_bullish: Option<String>,
    pub max_bearish: Option<String>,
    pub min_liquidity: Option<String>,
    pub min_holders: Option<String>,
    pub text_query: Option<String>,
}

/// Parse a raw bound; `None` for absent, blank, non-numeric or non-finite input.
fn bound(raw: &Option<String>) -> Option<f64> {
    raw.as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Inclusive lower bound; a missing record field compares as 0, so an asset
/// with an unknown value fails any positive minimum. That asymmetry is a
/// documented simplification of this screener, kept on purpose.
fn above_min(value: Option<f64>, raw: &Option<String>) -> bool {
    match bound(raw) {
        Some(min) => value.unwrap_or(0.0) >= min,
        None => true,
    }
}

/// Inclusive upper bound; missing record field compares as 0.
fn below_max(value: Option<f64>, raw: &Option<String>) -> bool {
    match bound(raw) {
        Some(max) => value.unwrap_or(0.0) <= max,
        None => true,
    }
}

/// Case-insensitive substring match against name or symbol. A blank needle
/// passes unconditionally.
fn text_matches(record: &UnifiedRecord, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(&needle) || record.symbol.to_lowercase().contains(&needle)
}

/// True when the record satisfies every active predicate (logical AND).
/// Pure; imposes no ordering on its callers.
pub fn matches(record: &UnifiedRecord, criteria: &FilterCriteria, search_text: &str) -> bool {
    if !text_matches(record, search_text) {
        return false;
    }
    if let Some(q) = &criteria.text_query {
        if !text_matches(record, q) {
            return false;
        }
    }

    above_min(Some(record.current_price), &criteria.min_price)
        && below_max(Some(record.current_price), &criteria.max_price)
        && above_min(record.change_24h, &criteria.min_24h_change)
        && below_max(record.change_24h, &criteria.max_24h_change)
        && above_min(record.change_7d, &criteria.min_7d_change)
        && below_max(record.change_7d, &criteria.max_7d_change)
        && above_min(record.volume, &criteria.min_volume)
        && above_min(record.market_cap, &criteria.min_market_cap)
        && above_min(record.bullish, &criteria.min_bullish)
        && below_max(record.bearish, &criteria.max_bearish)
        && above_min(record.liquidity, &criteria.min_liquidity)
        && above_min(record.holders.map(|h| h as f64), &criteria.min_holders)
}
