use axum::{routing::get, Router};
use metrics::{describe_counter, describe_gauge, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Initialize the Prometheus recorder and register the pipeline series.
    pub fn init() -> Self {
        let builder = PrometheusBuilder::new();

        let handle = builder
            .install_recorder()
            .expect("prometheus: install recorder");

        ensure_pipeline_metrics_described();

        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_pipeline_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("screener_refresh_total", "Completed refresh runs.");
        describe_counter!(
            "screener_refresh_failures_total",
            "Refresh runs aborted by a price feed failure."
        );
        describe_counter!(
            "screener_source_failures_total",
            "Auxiliary feed failures absorbed as empty result sets."
        );
        describe_histogram!(
            "screener_refresh_ms",
            "End-to-end refresh time in milliseconds."
        );
        describe_gauge!(
            "screener_last_refresh_ts",
            "Unix ts when the last refresh completed."
        );
    });
}
