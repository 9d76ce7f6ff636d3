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
use serde::Serialize;
use tradejournal_core::settings::{Settings, SettingsUpdate, Theme};

#[derive(Debug, Serialize)]
struct ThemeResponse {
    theme: Theme,
}

async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Settings>> {
    let settings = state.settings_service.get_settings()?;
    Ok(Json(settings))
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    ApiJson(update): ApiJson<SettingsUpdate>,
) -> ApiResult<Json<Settings>> {
    // Theme changes go through the journal so dashboards re-render.
    if let Some(theme) = update.theme {
        state.journal.set_theme(theme).await?;
    }
    let settings = state.settings_service.get_settings()?;
    Ok(Json(settings))
}

async fn toggle_theme(State(state): State<Arc<AppState>>) -> ApiResult<Json<ThemeResponse>> {
    let theme = state.journal.toggle_theme().await?;
    Ok(Json(ThemeResponse { theme }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/settings", get(get_settings).put(update_settings))
        .route("/settings/theme/toggle", post(toggle_theme))
}
