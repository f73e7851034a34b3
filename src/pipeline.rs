//! # Pipeline Orchestrator
//! Sequences one refresh run: mandatory price fetch, concurrent best-effort
//! auxiliary fetches, then the pure merge → filter → score → sort tail.
//!
//! Failure policy: the price feed is fail-closed (an error aborts the run and
//! surfaces to the caller, never partial or stale data); every auxiliary feed
//! is fail-open (a failure becomes an empty result set, logged and counted,
//! and only costs data completeness).

use std::collections::HashSet;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use metrics::{counter, gauge, histogram};
use tracing::{info, warn};

use crate::config::ScreenerConfig;
use crate::filter::{self, FilterCriteria};
use crate::merge::merge_records;
use crate::metrics::ensure_pipeline_metrics_described;
use crate::model::{Identifier, ScoredRecord};
use crate::ordering::{self, SortSpec};
use crate::score;
use crate::sources::catalyst::HttpCatalystSource;
use crate::sources::onchain::HttpChainSource;
use crate::sources::price::HttpPriceSource;
use crate::sources::search::HttpSearchSource;
use crate::sources::sentiment::HttpSentimentSource;
use crate::sources::{CatalystSource, ChainSource, PriceSource, SearchSource, SentimentSource};

pub struct ScreenerPipeline {
    price: Box<dyn PriceSource>,
    sentiment: Box<dyn SentimentSource>,
    chain: Box<dyn ChainSource>,
    catalysts: Box<dyn CatalystSource>,
    search: Box<dyn SearchSource>,
    search_cap: usize,
}

impl ScreenerPipeline {
    pub fn new(
        price: Box<dyn PriceSource>,
        sentiment: Box<dyn SentimentSource>,
        chain: Box<dyn ChainSource>,
        catalysts: Box<dyn CatalystSource>,
        search: Box<dyn SearchSource>,
        search_cap: usize,
    ) -> Self {
        Self {
            price,
            sentiment,
            chain,
            catalysts,
            search,
            search_cap,
        }
    }

    /// Wire the HTTP feeds from configuration, sharing one client.
    pub fn http(cfg: &ScreenerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .context("building http client")?;

        Ok(Self::new(
            Box::new(HttpPriceSource::new(client.clone(), cfg.price_url.clone())),
            Box::new(HttpSentimentSource::new(
                client.clone(),
                cfg.sentiment_url.clone(),
            )),
            Box::new(HttpChainSource::new(client.clone(), cfg.onchain_url.clone())),
            Box::new(HttpCatalystSource::new(
                client.clone(),
                cfg.catalyst_url.clone(),
            )),
            Box::new(HttpSearchSource::new(client, cfg.search_url.clone())),
            cfg.search_cap,
        ))
    }

    /// One full pipeline run over the given identifier universe.
    ///
    /// An empty identifier set yields an empty result without touching any
    /// feed. Auxiliary fetches wait for the price feed's id universe, then run
    /// concurrently with each other. Filtering happens before scoring, so a
    /// discarded record never gets a score attached.
    pub async fn refresh(
        &self,
        ids: &[Identifier],
        risk_bias: f64,
        criteria: &FilterCriteria,
        search_text: &str,
        spec: &SortSpec,
        pins: &HashSet<Identifier>,
    ) -> Result<Vec<ScoredRecord>> {
        ensure_pipeline_metrics_described();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let t0 = Instant::now();
        let prices = match self.price.fetch(ids).await {
            Ok(records) => records,
            Err(error) => {
                counter!("screener_refresh_failures_total").increment(1);
                return Err(error.context("price feed failed, refusing to serve partial data"));
            }
        };
        if prices.is_empty() {
            finish_run(t0, 0, 0);
            return Ok(Vec::new());
        }

        // The price universe drives the auxiliary fan-out; those three are
        // independent of each other and run concurrently.
        let universe: Vec<Identifier> = prices.iter().map(|p| p.id.clone()).collect();
        let (sentiment, chain, catalysts) = tokio::join!(
            self.sentiment.fetch(&universe),
            self.chain.fetch(&universe),
            self.catalysts.fetch(&universe),
        );
        let sentiment = absorb(self.sentiment.name(), sentiment);
        let chain = absorb(self.chain.name(), chain);
        let catalysts = absorb(self.catalysts.name(), catalysts);

        let unified = merge_records(prices, &sentiment, &chain, &catalysts);
        let total = unified.len();
        let surviving: Vec<_> = unified
            .into_iter()
            .filter(|r| filter::matches(r, criteria, search_text))
            .collect();
        let scored = score::attach_scores(surviving, risk_bias);
        let ordered = ordering::sort_records(scored, pins, spec);

        finish_run(t0, total, ordered.len());
        Ok(ordered)
    }

    /// Resolve a free-text query to candidate ids, capped to bound the
    /// downstream fetch fan-out.
    pub async fn search(&self, query: &str) -> Result<Vec<Identifier>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let mut ids = self
            .search
            .search(query)
            .await
            .context("search collaborator failed")?;
        ids.truncate(self.search_cap);
        Ok(ids)
    }
}

/// Collapse an auxiliary fetch outcome to its records, absorbing failure as
/// an empty set.
fn absorb<T>(source: &'static str, result: Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(error) => {
            warn!(error = ?error, source, "auxiliary feed failed, continuing without it");
            counter!("screener_source_failures_total", "source" => source).increment(1);
            Vec::new()
        }
    }
}

fn finish_run(t0: Instant, merged: usize, kept: usize) {
    let ms = t0.elapsed().as_secs_f64() * 1_000.0;
    histogram!("screener_refresh_ms").record(ms);
    counter!("screener_refresh_total").increment(1);
    gauge!("screener_last_refresh_ts").set(chrono::Utc::now().timestamp().max(0) as f64);
    info!(merged, kept, "refresh complete");
}
