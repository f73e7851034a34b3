//! # Ordering Engine
//! Total order over scored records: pinned assets first, then the requested
//! sort key under the requested direction. The sort is stable, so ties keep
//! their input order and repeated runs over unchanged input are reproducible.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Identifier, ScoredRecord};

/// Sortable column. `AlertRank` derives from the first catalyst alert's rank
/// (0 when there is none); lower rank marks a more prominent catalyst, but the
/// engine treats it as a plain numeric key under the requested direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    Price,
    Change24h,
    Change7d,
    Volume,
    MarketCap,
    Bullish,
    Bearish,
    Mentions,
    Liquidity,
    Holders,
    AlertRank,
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: Direction,
}

impl Default for SortSpec {
    /// Screener default: best composite score first.
    fn default() -> Self {
        Self {
            key: SortKey::Score,
            direction: Direction::Descending,
        }
    }
}

/// Order records: pins strictly before non-pins regardless of the spec, then
/// by the spec's key and direction. Missing numeric fields compare as 0; the
/// name key compares lowercased. Consumes the batch and returns the new order.
pub fn sort_records(
    mut records: Vec<ScoredRecord>,
    pins: &HashSet<Identifier>,
    spec: &SortSpec,
) -> Vec<ScoredRecord> {
    records.sort_by(|a, b| {
        let pinned_a = pins.contains(&a.record.id);
        let pinned_b = pins.contains(&b.record.id);
        // Pin priority is unaffected by direction.
        pinned_b
            .cmp(&pinned_a)
            .then_with(|| directed(key_ordering(a, b, spec.key), spec.direction))
    });
    records
}

fn directed(ord: Ordering, direction: Direction) -> Ordering {
    match direction {
        Direction::Ascending => ord,
        Direction::Descending => ord.reverse(),
    }
}

fn key_ordering(a: &ScoredRecord, b: &ScoredRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a
            .record
            .name
            .to_lowercase()
            .cmp(&b.record.name.to_lowercase()),
        _ => numeric_key(a, key).total_cmp(&numeric_key(b, key)),
    }
}

fn numeric_key(r: &ScoredRecord, key: SortKey) -> f64 {
    match key {
        SortKey::Price => r.record.current_price,
        SortKey::Change24h => r.record.change_24h.unwrap_or(0.0),
        SortKey::Change7d => r.record.change_7d.unwrap_or(0.0),
        SortKey::Volume => r.record.volume.unwrap_or(0.0),
        SortKey::MarketCap => r.record.market_cap.unwrap_or(0.0),
        SortKey::Bullish => r.record.bullish.unwrap_or(0.0),
        SortKey::Bearish => r.record.bearish.unwrap_or(0.0),
        SortKey::Mentions => r.record.mentions.unwrap_or(0) as f64,
        SortKey::Liquidity => r.record.liquidity.unwrap_or(0.0),
        SortKey::Holders => r.record.holders.unwrap_or(0) as f64,
        SortKey::AlertRank => r
            .record
            .alerts
            .first()
            .and_then(|a| a.rank)
            .map(f64::from)
            .unwrap_or(0.0),
        SortKey::Score => r.score,
        // Name is handled lexicographically above.
        SortKey::Name => 0.0,
    }
}
