use std::sync::Arc;

use crate::{
    error::{ApiPath, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use tradejournal_core::stats::{DaySummary, EquityPoint, Sparkline, TradeStats};

async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<TradeStats>> {
    Ok(Json(state.journal.stats()))
}

async fn get_equity(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<EquityPoint>>> {
    Ok(Json(state.journal.equity_series()))
}

async fn get_sparkline(State(state): State<Arc<AppState>>) -> ApiResult<Json<Sparkline>> {
    Ok(Json(state.journal.sparkline()))
}

async fn get_day_summary(
    ApiPath(date): ApiPath<NaiveDate>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DaySummary>> {
    Ok(Json(state.journal.day_summary(date)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/equity", get(get_equity))
        .route("/equity/sparkline", get(get_sparkline))
        .route("/days/{date}", get(get_day_summary))
}
