use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    config::{Config, LogFormat},
    events::{EventBus, EventBusRenderer},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use tradejournal_core::{
    fx::{FxService, FxServiceTrait, RateTable},
    journal::{JournalService, JournalServiceTrait},
    settings::{SettingsService, SettingsServiceTrait},
};
use tradejournal_rates::{OpenErApiProvider, RateProvider, StaticRateProvider};
use tradejournal_storage_sqlite::{db, SettingsRepository, TradeRepository};

/// Subscribers that fall further behind than this miss events.
const EVENT_BUS_CAPACITY: usize = 256;

pub struct AppState {
    pub journal: Arc<dyn JournalServiceTrait>,
    pub fx_service: Arc<dyn FxServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub rate_provider: Arc<dyn RateProvider>,
    pub event_bus: EventBus,
    pub home_currency: String,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init(),
    };
    if let Err(e) = result {
        eprintln!("Tracing already initialized: {}", e);
    }
}

fn build_rate_provider(config: &Config) -> Arc<dyn RateProvider> {
    if config.rates_offline {
        let table = RateTable::default_table();
        let base = table.base.clone();
        let rates: HashMap<_, _> = table.into();
        tracing::info!("Rates offline; using the built-in {} table", base);
        Arc::new(StaticRateProvider::new(base, rates))
    } else {
        Arc::new(OpenErApiProvider::new(config.rates_url.clone()))
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!("Opening journal database at {}", config.db_path);
    let (pool, writer) = db::open(&config.db_path)?;

    let trade_repository = Arc::new(TradeRepository::new(pool.clone(), writer.clone()));
    let settings_repository = Arc::new(SettingsRepository::new(pool, writer));

    let fx_service: Arc<dyn FxServiceTrait> =
        Arc::new(FxService::new(config.home_currency.clone()));
    let settings_service: Arc<dyn SettingsServiceTrait> = Arc::new(SettingsService::new(
        settings_repository,
        config.home_currency.clone(),
        config.missing_rate_policy,
    ));

    let event_bus = EventBus::new(EVENT_BUS_CAPACITY);
    let renderer = Arc::new(EventBusRenderer::new(event_bus.clone()));

    let journal = JournalService::new(
        fx_service.clone(),
        trade_repository,
        settings_service.clone(),
        config.missing_rate_policy,
    )
    .with_renderer(renderer);
    let loaded = journal.initialize()?;
    tracing::info!(
        "Loaded {} trades (home currency {}, missing-rate policy {})",
        loaded,
        config.home_currency,
        config.missing_rate_policy
    );

    Ok(Arc::new(AppState {
        journal: Arc::new(journal),
        fx_service,
        settings_service,
        rate_provider: build_rate_provider(config),
        event_bus,
        home_currency: config.home_currency.clone(),
    }))
}
