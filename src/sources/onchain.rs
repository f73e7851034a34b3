use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::model::{ChainRecord, Identifier};
use crate::sources::ChainSource;

/// On-chain analytics feed: liquidity estimate and holder count per asset id.
pub struct HttpChainSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChainSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ChainSource for HttpChainSource {
    async fn fetch(&self, ids: &[Identifier]) -> Result<Vec<ChainRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let url = format!("{}/onchain", self.base_url.trim_end_matches('/'));
        let ids_param = ids.join(",");
        let resp = self
            .client
            .get(&url)
            .query(&[("ids", ids_param.as_str())])
            .send()
            .await
            .context("on-chain feed request")?
            .error_for_status()
            .context("on-chain feed returned non-success status")?;

        resp.json::<Vec<ChainRecord>>()
            .await
            .context("on-chain feed payload")
    }

    fn name(&self) -> &'static str {
        "onchain"
    }
}
