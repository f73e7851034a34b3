//! Coin Screener — Binary Entrypoint
//! Boots the Axum HTTP server, wiring config, feeds, shared state, and the
//! Prometheus exporter.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coin_screener::config::ScreenerConfig;
use coin_screener::metrics::Metrics;
use coin_screener::pins::PinSet;
use coin_screener::pipeline::ScreenerPipeline;
use coin_screener::{api, AppState};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = ScreenerConfig::load();
    let metrics = Metrics::init();

    let pipeline = Arc::new(ScreenerPipeline::http(&cfg)?);
    let state = AppState::new(pipeline, Arc::new(PinSet::new()), cfg.default_ids.clone());
    let app = api::router(state).merge(metrics.router());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, "coin screener listening");
    axum::serve(listener, app).await?;
    Ok(())
}
