use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::model::{CatalystRecord, Identifier};
use crate::sources::CatalystSource;

/// Catalyst/news feed: zero or more alerts per asset id.
pub struct HttpCatalystSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalystSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CatalystSource for HttpCatalystSource {
    async fn fetch(&self, ids: &[Identifier]) -> Result<Vec<CatalystRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let url = format!("{}/catalysts", self.base_url.trim_end_matches('/'));
        let ids_param = ids.join(",");
        let resp = self
            .client
            .get(&url)
            .query(&[("ids", ids_param.as_str())])
            .send()
            .await
            .context("catalyst feed request")?
            .error_for_status()
            .context("catalyst feed returned non-success status")?;

        resp.json::<Vec<CatalystRecord>>()
            .await
            .context("catalyst feed payload")
    }

    fn name(&self) -> &'static str {
        "catalyst"
    }
}
