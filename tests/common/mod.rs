// tests/common/mod.rs
// Mock feed collaborators shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use coin_screener::model::{
    CatalystRecord, ChainRecord, Identifier, PriceRecord, SentimentRecord,
};
use coin_screener::pipeline::ScreenerPipeline;
use coin_screener::sources::{
    CatalystSource, ChainSource, PriceSource, SearchSource, SentimentSource,
};

pub fn price(id: &str, symbol: &str, name: &str, current_price: f64) -> PriceRecord {
    PriceRecord {
        id: id.into(),
        symbol: symbol.into(),
        name: name.into(),
        current_price,
        change_24h: None,
        change_7d: None,
        market_cap: None,
        volume: None,
    }
}

pub fn sentiment(id: &str, bullish: f64, bearish: f64) -> SentimentRecord {
    SentimentRecord {
        id: id.into(),
        bullish: Some(bullish),
        bearish: Some(bearish),
        mentions: None,
    }
}

pub fn ids(list: &[&str]) -> Vec<Identifier> {
    list.iter().map(|s| s.to_string()).collect()
}

pub struct StaticPrices(pub Vec<PriceRecord>);

#[async_trait]
impl PriceSource for StaticPrices {
    async fn fetch(&self, _ids: &[Identifier]) -> Result<Vec<PriceRecord>> {
        Ok(self.0.clone())
    }
    fn name(&self) -> &'static str {
        "price"
    }
}

/// Price feed that answers every requested id with a minimal record.
pub struct EchoPrices;

#[async_trait]
impl PriceSource for EchoPrices {
    async fn fetch(&self, ids: &[Identifier]) -> Result<Vec<PriceRecord>> {
        Ok(ids.iter().map(|id| price(id, id, id, 1.0)).collect())
    }
    fn name(&self) -> &'static str {
        "price"
    }
}

pub struct FailingPrices;

#[async_trait]
impl PriceSource for FailingPrices {
    async fn fetch(&self, _ids: &[Identifier]) -> Result<Vec<PriceRecord>> {
        Err(anyhow!("price feed unreachable"))
    }
    fn name(&self) -> &'static str {
        "price"
    }
}

/// Counts fetches so tests can assert a feed was never touched.
pub struct CountingPrices {
    pub records: Vec<PriceRecord>,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl PriceSource for CountingPrices {
    async fn fetch(&self, _ids: &[Identifier]) -> Result<Vec<PriceRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
    fn name(&self) -> &'static str {
        "price"
    }
}

pub struct StaticSentiment(pub Vec<SentimentRecord>);

#[async_trait]
impl SentimentSource for StaticSentiment {
    async fn fetch(&self, _ids: &[Identifier]) -> Result<Vec<SentimentRecord>> {
        Ok(self.0.clone())
    }
    fn name(&self) -> &'static str {
        "sentiment"
    }
}

pub struct FailingSentiment;

#[async_trait]
impl SentimentSource for FailingSentiment {
    async fn fetch(&self, _ids: &[Identifier]) -> Result<Vec<SentimentRecord>> {
        Err(anyhow!("sentiment feed 503"))
    }
    fn name(&self) -> &'static str {
        "sentiment"
    }
}

pub struct StaticChain(pub Vec<ChainRecord>);

#[async_trait]
impl ChainSource for StaticChain {
    async fn fetch(&self, _ids: &[Identifier]) -> Result<Vec<ChainRecord>> {
        Ok(self.0.clone())
    }
    fn name(&self) -> &'static str {
        "onchain"
    }
}

pub struct FailingChain;

#[async_trait]
impl ChainSource for FailingChain {
    async fn fetch(&self, _ids: &[Identifier]) -> Result<Vec<ChainRecord>> {
        Err(anyhow!("on-chain feed timed out"))
    }
    fn name(&self) -> &'static str {
        "onchain"
    }
}

pub struct StaticCatalysts(pub Vec<CatalystRecord>);

#[async_trait]
impl CatalystSource for StaticCatalysts {
    async fn fetch(&self, _ids: &[Identifier]) -> Result<Vec<CatalystRecord>> {
        Ok(self.0.clone())
    }
    fn name(&self) -> &'static str {
        "catalyst"
    }
}

pub struct StaticSearch(pub Vec<Identifier>);

#[async_trait]
impl SearchSource for StaticSearch {
    async fn search(&self, _query: &str) -> Result<Vec<Identifier>> {
        Ok(self.0.clone())
    }
    fn name(&self) -> &'static str {
        "search"
    }
}

pub fn build_pipeline(
    price: Box<dyn PriceSource>,
    sentiment: Box<dyn SentimentSource>,
    chain: Box<dyn ChainSource>,
    catalysts: Box<dyn CatalystSource>,
    search: Box<dyn SearchSource>,
) -> ScreenerPipeline {
    ScreenerPipeline::new(price, sentiment, chain, catalysts, search, 10)
}

/// Pipeline with quiet auxiliary feeds; handy when a test only cares about
/// the price universe.
pub fn price_only_pipeline(price: Box<dyn PriceSource>) -> ScreenerPipeline {
    build_pipeline(
        price,
        Box::new(StaticSentiment(Vec::new())),
        Box::new(StaticChain(Vec::new())),
        Box::new(StaticCatalysts(Vec::new())),
        Box::new(StaticSearch(Vec::new())),
    )
}
