use std::sync::Arc;

use crate::{
    error::{ApiJson, ApiPath, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tradejournal_core::{
    calendar::{CalendarMonth, YearMonth},
    utils::time_utils::today,
};

/// Either jump to a month or move relative to the current one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ViewMonthRequest {
    Set(YearMonth),
    Shift { delta: i32 },
}

async fn get_calendar_month(
    ApiPath((year, month)): ApiPath<(i32, u32)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CalendarMonth>> {
    let month = YearMonth::new(year, month)?;
    Ok(Json(state.journal.calendar_month(month, today())))
}

async fn get_view_month(State(state): State<Arc<AppState>>) -> ApiResult<Json<CalendarMonth>> {
    let month = state.journal.view_month();
    Ok(Json(state.journal.calendar_month(month, today())))
}

async fn set_view_month(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<ViewMonthRequest>,
) -> ApiResult<Json<CalendarMonth>> {
    let month = match request {
        ViewMonthRequest::Set(month) => state.journal.set_view_month(month),
        ViewMonthRequest::Shift { delta } => state.journal.shift_view_month(delta),
    };
    Ok(Json(state.journal.calendar_month(month, today())))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calendar/view", get(get_view_month).put(set_view_month))
        .route("/calendar/{year}/{month}", get(get_calendar_month))
}
