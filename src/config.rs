// src/config.rs
//! Runtime configuration: feed base URLs, fetch limits, and the default asset
//! universe. Loaded from TOML with built-in defaults when the file is missing
//! or malformed, so a bare checkout still boots.

use serde::Deserialize;
use std::{fs, path::Path};

pub const DEFAULT_CONFIG_PATH: &str = "config/screener.toml";
pub const ENV_CONFIG_PATH: &str = "SCREENER_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScreenerConfig {
    pub bind_addr: String,
    pub price_url: String,
    pub sentiment_url: String,
    pub onchain_url: String,
    pub catalyst_url: String,
    pub search_url: String,
    pub request_timeout_secs: u64,
    /// Cap on candidate ids taken from a text search, bounding fetch fan-out.
    pub search_cap: usize,
    /// Quiesce delay for keystroke-driven refreshes at the boundary.
    pub debounce_ms: u64,
    /// Universe shown when no search or explicit id list is given.
    pub default_ids: Vec<String>,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            price_url: "https://api.coingecko.com/api/v3".to_string(),
            sentiment_url: "https://sentiment.example.com/v1".to_string(),
            onchain_url: "https://onchain.example.com/v1".to_string(),
            catalyst_url: "https://catalysts.example.com/v1".to_string(),
            search_url: "https://api.coingecko.com/api/v3".to_string(),
            request_timeout_secs: 10,
            search_cap: 10,
            debounce_ms: 300,
            default_ids: [
                "bitcoin",
                "ethereum",
                "solana",
                "dogecoin",
                "cardano",
                "chainlink",
                "polkadot",
                "avalanche-2",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl ScreenerConfig {
    /// Load from `SCREENER_CONFIG` (or the default path).
    pub fn load() -> Self {
        let path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from_file(path)
    }

    /// Load configuration from a TOML file.
    /// Falls back to defaults on a missing or unparseable file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let mut cfg = match fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    %error,
                    "unparseable screener config; using defaults"
                );
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        cfg.sanitize();
        cfg
    }

    /// Keep operational limits usable regardless of what the file said.
    fn sanitize(&mut self) {
        if self.search_cap == 0 {
            self.search_cap = Self::default().search_cap;
        }
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = Self::default().request_timeout_secs;
        }
    }
}
