//! Background rate refresh.
//!
//! The first tick fires immediately, so the table is fetched once at startup
//! and then every `TJ_RATES_REFRESH_SECS`.

use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

use crate::main_lib::AppState;

/// Starts the periodic rate refresh task.
pub fn start_rate_refresh_scheduler(state: Arc<AppState>, period: Duration) {
    tokio::spawn(async move {
        info!(
            "Rate refresh scheduler started ({}s interval, provider {})",
            period.as_secs(),
            state.rate_provider.id()
        );

        let mut refresh_interval = interval(period);
        refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            refresh_interval.tick().await;
            run_scheduled_refresh(&state).await;
        }
    });
}

/// Runs a single refresh. Failures are logged by the journal and the previous
/// table stays in place.
async fn run_scheduled_refresh(state: &Arc<AppState>) {
    let refreshed = state
        .journal
        .refresh_rates(state.rate_provider.as_ref())
        .await;
    debug!("Scheduled rate refresh finished (refreshed: {})", refreshed);
}
