// src/sources/mod.rs
pub mod catalyst;
pub mod onchain;
pub mod price;
pub mod search;
pub mod sentiment;

use anyhow::Result;

use crate::model::{CatalystRecord, ChainRecord, Identifier, PriceRecord, SentimentRecord};

/// Authoritative price feed. The one source whose failure is fatal to a run.
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self, ids: &[Identifier]) -> Result<Vec<PriceRecord>>;
    fn name(&self) -> &'static str;
}

/// Sentiment feed (bullish/bearish scores, mention volume). Best-effort.
#[async_trait::async_trait]
pub trait SentimentSource: Send + Sync {
    async fn fetch(&self, ids: &[Identifier]) -> Result<Vec<SentimentRecord>>;
    fn name(&self) -> &'static str;
}

/// On-chain feed (liquidity estimate, holder count). Best-effort.
#[async_trait::async_trait]
pub trait ChainSource: Send + Sync {
    async fn fetch(&self, ids: &[Identifier]) -> Result<Vec<ChainRecord>>;
    fn name(&self) -> &'static str;
}

/// Catalyst/news feed (alerts per asset). Best-effort.
#[async_trait::async_trait]
pub trait CatalystSource: Send + Sync {
    async fn fetch(&self, ids: &[Identifier]) -> Result<Vec<CatalystRecord>>;
    fn name(&self) -> &'static str;
}

/// Free-text search collaborator returning ranked candidate ids.
#[async_trait::async_trait]
pub trait SearchSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Identifier>>;
    fn name(&self) -> &'static str;
}
