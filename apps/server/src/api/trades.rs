use std::sync::Arc;

use crate::{
    error::{ApiJson, ApiPath, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tradejournal_core::trades::{NewTrade, Trade, TradeUpdate};

async fn list_trades(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Trade>>> {
    Ok(Json(state.journal.get_trades()))
}

async fn create_trade(
    State(state): State<Arc<AppState>>,
    ApiJson(new_trade): ApiJson<NewTrade>,
) -> ApiResult<Json<Trade>> {
    let trade = state.journal.record_trade(new_trade).await?;
    Ok(Json(trade))
}

async fn get_trade(
    ApiPath(id): ApiPath<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Trade>> {
    let trade = state.journal.get_trade(&id)?;
    Ok(Json(trade))
}

async fn update_trade(
    ApiPath(id): ApiPath<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(update): ApiJson<TradeUpdate>,
) -> ApiResult<Json<Trade>> {
    let trade = state.journal.update_trade(&id, update).await?;
    Ok(Json(trade))
}

async fn delete_trade(
    ApiPath(id): ApiPath<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.journal.delete_trade(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trades", get(list_trades).post(create_trade))
        .route(
            "/trades/{id}",
            get(get_trade).put(update_trade).delete(delete_trade),
        )
}
