use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::model::{Identifier, SentimentRecord};
use crate::sources::SentimentSource;

/// Social sentiment feed: bullish/bearish scores (0–100) and mention volume
/// per asset id.
pub struct HttpSentimentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSentimentSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SentimentSource for HttpSentimentSource {
    async fn fetch(&self, ids: &[Identifier]) -> Result<Vec<SentimentRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let url = format!("{}/sentiment", self.base_url.trim_end_matches('/'));
        let ids_param = ids.join(",");
        let resp = self
            .client
            .get(&url)
            .query(&[("ids", ids_param.as_str())])
            .send()
            .await
            .context("sentiment feed request")?
            .error_for_status()
            .context("sentiment feed returned non-success status")?;

        resp.json::<Vec<SentimentRecord>>()
            .await
            .context("sentiment feed payload")
    }

    fn name(&self) -> &'static str {
        "sentiment"
    }
}
