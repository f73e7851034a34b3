use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::filter::FilterCriteria;
use crate::model::{Identifier, ScoredRecord};
use crate::ordering::{Direction, SortKey, SortSpec};
use crate::pins::PinSet;
use crate::pipeline::ScreenerPipeline;

/// Bias applied when the query does not carry one; the UI slider midpoint.
const DEFAULT_RISK_BIAS: f64 = 0.5;

#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<ScreenerPipeline>,
    pins: Arc<PinSet>,
    default_ids: Arc<Vec<Identifier>>,
}

impl AppState {
    pub fn new(
        pipeline: Arc<ScreenerPipeline>,
        pins: Arc<PinSet>,
        default_ids: Vec<Identifier>,
    ) -> Self {
        Self {
            pipeline,
            pins,
            default_ids: Arc::new(default_ids),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/screener", get(screener))
        .route("/search", get(search))
        .route("/pins", get(list_pins))
        .route("/pins/{id}/toggle", post(toggle_pin))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Error that renders as a JSON `{"error": "..."}` body. A failed refresh is
/// reported as such; the caller can tell it apart from an empty match set.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: format!("{e:#}"),
        }
    }
}

/// Query surface of the screener view. Everything arrives as strings from the
/// UI; tolerant parsing happens here and in the filter engine, never upstream.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ScreenerQuery {
    /// Comma-separated explicit universe; takes precedence over search.
    ids: Option<String>,
    /// Free text; selects the candidate universe and feeds the text filter.
    search: Option<String>,
    risk_bias: Option<String>,
    sort_key: Option<String>,
    direction: Option<String>,
    #[serde(flatten)]
    criteria: FilterCriteria,
}

#[derive(Serialize)]
struct ScreenerResponse {
    count: usize,
    rows: Vec<ScoredRecord>,
}

async fn screener(
    State(state): State<AppState>,
    Query(q): Query<ScreenerQuery>,
) -> Result<Json<ScreenerResponse>, ApiError> {
    let search_text = q.search.unwrap_or_default();

    let ids: Vec<Identifier> = if let Some(csv) = q.ids.as_deref() {
        csv.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    } else if !search_text.trim().is_empty() {
        state.pipeline.search(&search_text).await?
    } else {
        state.default_ids.as_ref().clone()
    };

    let mut spec = SortSpec::default();
    if let Some(key) = parse_enum::<SortKey>(&q.sort_key) {
        spec.key = key;
    }
    if let Some(direction) = parse_enum::<Direction>(&q.direction) {
        spec.direction = direction;
    }

    let risk_bias = q
        .risk_bias
        .as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_RISK_BIAS);

    let pins = state.pins.snapshot();
    let rows = state
        .pipeline
        .refresh(&ids, risk_bias, &q.criteria, &search_text, &spec, &pins)
        .await?;

    Ok(Json(ScreenerResponse {
        count: rows.len(),
        rows,
    }))
}

/// Parse an enum from its wire string (e.g. "marketCap", "descending").
fn parse_enum<T: DeserializeOwned>(raw: &Option<String>) -> Option<T> {
    raw.as_deref()
        .and_then(|s| serde_json::from_value(json!(s)).ok())
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    query: String,
}

async fn search(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<Identifier>>, ApiError> {
    Ok(Json(state.pipeline.search(&q.query).await?))
}

async fn list_pins(State(state): State<AppState>) -> Json<Vec<Identifier>> {
    let mut pins: Vec<Identifier> = state.pins.snapshot().into_iter().collect();
    pins.sort();
    Json(pins)
}

#[derive(Serialize)]
struct ToggleResponse {
    id: Identifier,
    pinned: bool,
}

async fn toggle_pin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ToggleResponse> {
    let pinned = state.pins.toggle(&id);
    Json(ToggleResponse { id, pinned })
}
