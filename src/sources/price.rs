use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::model::{Identifier, PriceRecord};
use crate::sources::PriceSource;

/// Price feed over a CoinGecko-compatible `/coins/markets` endpoint.
pub struct HttpPriceSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPriceSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch(&self, ids: &[Identifier]) -> Result<Vec<PriceRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let url = format!("{}/coins/markets", self.base_url.trim_end_matches('/'));
        let ids_param = ids.join(",");
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", "usd"),
                ("ids", ids_param.as_str()),
                ("price_change_percentage", "24h,7d"),
            ])
            .send()
            .await
            .context("price feed request")?
            .error_for_status()
            .context("price feed returned non-success status")?;

        resp.json::<Vec<PriceRecord>>()
            .await
            .context("price feed payload")
    }

    fn name(&self) -> &'static str {
        "price"
    }
}
