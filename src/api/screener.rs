//! Screener API endpoints.

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use tracing::debug;

use crate::api::signals::ApiResponse;
use crate::error::{AppError, Result};
use crate::types::{MarketOverview, ScreenerFilter, ScreenerResult, SymbolSnapshot};
use crate::AppState;

/// Body of a screener request.
#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    pub symbols: Vec<SymbolSnapshot>,
    #[serde(default)]
    pub filter: ScreenerFilter,
}

/// Body of an overview request.
#[derive(Debug, Deserialize)]
pub struct OverviewRequest {
    pub symbols: Vec<SymbolSnapshot>,
    /// Overrides the configured opportunity list length.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Create the screener router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/screener", post(screen))
        .route("/api/screener/overview", post(overview))
}

fn check_batch(state: &AppState, symbols: &[SymbolSnapshot]) -> Result<()> {
    if symbols.is_empty() {
        return Err(AppError::BadRequest("No symbols supplied".to_string()));
    }
    if symbols.len() > state.config.max_batch_size {
        return Err(AppError::PayloadTooLarge(format!(
            "{} symbols exceeds the limit of {}",
            symbols.len(),
            state.config.max_batch_size
        )));
    }
    Ok(())
}

/// Filter a universe of symbols.
async fn screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<ApiResponse<ScreenerResult>>> {
    check_batch(&state, &request.symbols)?;
    request.filter.validate()?;

    debug!("Screening {} symbols", request.symbols.len());
    let result = state.screener.screen(&request.symbols, &request.filter);

    Ok(Json(ApiResponse::new(result)))
}

/// Summary, leaderboard and opportunity lists for a universe of symbols.
async fn overview(
    State(state): State<AppState>,
    Json(request): Json<OverviewRequest>,
) -> Result<Json<ApiResponse<MarketOverview>>> {
    check_batch(&state, &request.symbols)?;

    let limit = request.limit.unwrap_or(state.config.opportunity_limit);
    let overview = state.screener.overview(&request.symbols, limit);

    Ok(Json(ApiResponse::new(overview)))
}
