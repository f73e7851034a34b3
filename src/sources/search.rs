use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::model::Identifier;
use crate::sources::SearchSource;

/// Text search over a CoinGecko-compatible `/search` endpoint. Returns the
/// ranked candidate ids; capping the fan-out is the pipeline's job.
pub struct HttpSearchSource {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    coins: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: Identifier,
}

impl HttpSearchSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SearchSource for HttpSearchSource {
    async fn search(&self, query: &str) -> Result<Vec<Identifier>> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .context("search request")?
            .error_for_status()
            .context("search returned non-success status")?;

        let payload = resp.json::<SearchPayload>().await.context("search payload")?;
        Ok(payload.coins.into_iter().map(|hit| hit.id).collect())
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_payload_keeps_ranked_order_and_ignores_extras() {
        let raw = r#"{
            "coins": [
                {"id": "dogecoin", "name": "Dogecoin", "market_cap_rank": 9},
                {"id": "dogelon-mars", "name": "Dogelon Mars"}
            ],
            "exchanges": []
        }"#;
        let payload: SearchPayload = serde_json::from_str(raw).unwrap();
        let ids: Vec<Identifier> = payload.coins.into_iter().map(|h| h.id).collect();
        assert_eq!(ids, ["dogecoin", "dogelon-mars"]);
    }

    #[test]
    fn missing_coins_key_parses_as_empty() {
        let payload: SearchPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.coins.is_empty());
    }
}
