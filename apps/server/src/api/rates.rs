use std::sync::Arc;

use crate::{
    error::{ApiJson, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tradejournal_core::{
    constants::SUPPORTED_CURRENCIES,
    errors::Error as CoreError,
    fx::{normalize_currency_code, RateTable, Ticker},
    utils::decimal_utils::serialize_decimal_2,
};

#[derive(Debug, Deserialize)]
struct ConvertRequest {
    amount: Decimal,
    currency: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertResponse {
    #[serde(serialize_with = "serialize_decimal_2")]
    converted_amount: Decimal,
    available: bool,
    home_currency: String,
}

#[derive(Debug, Serialize)]
struct RefreshResponse {
    refreshed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrenciesResponse {
    home_currency: String,
    supported: Vec<&'static str>,
}

async fn get_rates(State(state): State<Arc<AppState>>) -> ApiResult<Json<RateTable>> {
    let rates = state.fx_service.current_rates();
    Ok(Json((*rates).clone()))
}

async fn get_ticker(State(state): State<Arc<AppState>>) -> ApiResult<Json<Ticker>> {
    Ok(Json(state.fx_service.ticker()))
}

async fn refresh_rates(State(state): State<Arc<AppState>>) -> ApiResult<Json<RefreshResponse>> {
    let refreshed = state
        .journal
        .refresh_rates(state.rate_provider.as_ref())
        .await;
    Ok(Json(RefreshResponse { refreshed }))
}

async fn convert(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<ConvertRequest>,
) -> ApiResult<Json<ConvertResponse>> {
    let currency = normalize_currency_code(&request.currency).map_err(CoreError::from)?;
    let conversion = state.fx_service.convert(request.amount, &currency);
    Ok(Json(ConvertResponse {
        converted_amount: conversion.unwrap_or_zero(),
        available: conversion.is_available(),
        home_currency: state.home_currency.clone(),
    }))
}

async fn list_currencies(State(state): State<Arc<AppState>>) -> ApiResult<Json<CurrenciesResponse>> {
    Ok(Json(CurrenciesResponse {
        home_currency: state.home_currency.clone(),
        supported: SUPPORTED_CURRENCIES.to_vec(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rates", get(get_rates))
        .route("/rates/ticker", get(get_ticker))
        .route("/rates/refresh", post(refresh_rates))
        .route("/convert", post(convert))
        .route("/currencies", get(list_currencies))
}
