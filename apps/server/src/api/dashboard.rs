use std::{convert::Infallible, sync::Arc, time::Duration};

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    routing::get,
    Json, Router,
};
use futures_core::Stream;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tradejournal_core::{dashboard::DashboardSnapshot, utils::time_utils::today};

async fn get_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<DashboardSnapshot>> {
    let snapshot = state.journal.snapshot(today())?;
    Ok(Json(snapshot))
}

async fn stream_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let receiver = BroadcastStream::new(state.event_bus.subscribe());
    let stream = tokio_stream::StreamExt::filter_map(receiver, |event| match event {
        Ok(evt) => {
            let sse_event = SseEvent::default().event(evt.name);
            let sse_event = if let Some(payload) = evt.payload {
                match sse_event.json_data(payload) {
                    Ok(ev) => ev,
                    Err(err) => {
                        tracing::error!("Failed to serialize SSE payload: {}", err);
                        SseEvent::default().event(evt.name)
                    }
                }
            } else {
                sse_event
            };
            Some(Ok(sse_event))
        }
        // The next update carries the full snapshot, so dropped ones are not replayed.
        Err(BroadcastStreamRecvError::Lagged(_)) => None,
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/events/stream", get(stream_events))
}
