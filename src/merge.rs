//! # Record Merger
//! Joins the authoritative price list with the auxiliary feed results into one
//! `UnifiedRecord` per asset. Pure; no I/O. The orchestrator is responsible
//! for turning a failed auxiliary fetch into an empty slice before calling in.

use std::collections::HashMap;

use crate::model::{CatalystRecord, ChainRecord, PriceRecord, SentimentRecord, UnifiedRecord};

/// Merge per-source partial records keyed by asset id.
///
/// The price list defines the output universe: auxiliary records whose id has
/// no price-side counterpart are dropped silently, and an empty price list
/// yields an empty result. Price fields are authoritative and exclusive to the
/// price feed; each auxiliary source only ever fills its own fields, so no
/// merge order can overwrite anything.
pub fn merge_records(
    prices: Vec<PriceRecord>,
    sentiment: &[SentimentRecord],
    chain: &[ChainRecord],
    catalysts: &[CatalystRecord],
) -> Vec<UnifiedRecord> {
    let sentiment_by_id: HashMap<&str, &SentimentRecord> =
        sentiment.iter().map(|r| (r.id.as_str(), r)).collect();
    let chain_by_id: HashMap<&str, &ChainRecord> =
        chain.iter().map(|r| (r.id.as_str(), r)).collect();
    let catalysts_by_id: HashMap<&str, &CatalystRecord> =
        catalysts.iter().map(|r| (r.id.as_str(), r)).collect();

    prices
        .into_iter()
        .map(|p| {
            let mut out = UnifiedRecord::new(p.id, p.symbol, p.name, p.current_price);
            out.change_24h = p.change_24h;
            out.change_7d = p.change_7d;
            out.market_cap = p.market_cap;
            out.volume = p.volume;

            if let Some(s) = sentiment_by_id.get(out.id.as_str()) {
                out.bullish = s.bullish;
                out.bearish = s.bearish;
                out.mentions = s.mentions;
            }
            if let Some(c) = chain_by_id.get(out.id.as_str()) {
                out.liquidity = c.liquidity;
                out.holders = c.holders;
            }
            if let Some(k) = catalysts_by_id.get(out.id.as_str()) {
                out.alerts = k.alerts.clone();
            }
            out
        })
        .collect()
}
