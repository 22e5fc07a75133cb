//! Signal API endpoints.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::services::screener::change_pct;
use crate::services::signals::{aggregate, evaluate, SIGNAL_WEIGHTS};
use crate::types::{IndicatorKey, IndicatorRow, OverallSignal, SignalSet};
use crate::AppState;

/// API response wrapper.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiMeta {
    /// Unix timestamp (milliseconds) when computed.
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: ApiMeta {
                timestamp: chrono::Utc::now().timestamp_millis(),
            },
        }
    }
}

/// Body of an evaluation request.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub current: IndicatorRow,
    #[serde(default)]
    pub previous: Option<IndicatorRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub signals: SignalSet,
    pub overall: OverallSignal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_pct: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeightEntry {
    pub indicator: IndicatorKey,
    pub weight: f64,
}

/// Create the signals router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/evaluate", post(evaluate_row))
        .route("/aggregate", post(aggregate_signals))
        .route("/weights", get(get_weights))
}

/// Detect and aggregate signals for one row.
async fn evaluate_row(Json(request): Json<EvaluateRequest>) -> Json<ApiResponse<EvaluateResponse>> {
    let previous = request.previous.as_ref();
    let (signals, overall) = evaluate(&request.current, previous);

    Json(ApiResponse::new(EvaluateResponse {
        change_pct: change_pct(&request.current, previous),
        signals,
        overall,
    }))
}

/// Aggregate a caller-supplied signal set.
async fn aggregate_signals(Json(signals): Json<SignalSet>) -> Json<ApiResponse<OverallSignal>> {
    Json(ApiResponse::new(aggregate(&signals)))
}

/// Get the fixed aggregation weights.
async fn get_weights() -> Json<ApiResponse<Vec<WeightEntry>>> {
    let weights = SIGNAL_WEIGHTS
        .iter()
        .map(|(indicator, weight)| WeightEntry {
            indicator: *indicator,
            weight: *weight,
        })
        .collect();

    Json(ApiResponse::new(weights))
}
