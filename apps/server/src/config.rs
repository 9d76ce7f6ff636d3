use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use tradejournal_core::constants::DEFAULT_HOME_CURRENCY;
use tradejournal_core::fx::{normalize_currency_code, MissingRatePolicy};
use tradejournal_rates::provider::open_er_api::DEFAULT_URL as DEFAULT_RATES_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else if s.eq_ignore_ascii_case("text") {
            Ok(LogFormat::Text)
        } else {
            Err(anyhow!("expected 'text' or 'json', got '{}'", s))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub home_currency: String,
    pub missing_rate_policy: MissingRatePolicy,
    pub rates_url: String,
    pub rates_refresh_interval: Duration,
    /// Never fetch; keep the built-in default table.
    pub rates_offline: bool,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads `TJ_*` variables, loading `.env` first.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Unset variables take
    /// their defaults; malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = var("TJ_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid TJ_LISTEN_ADDR")?;
        let db_path = var("TJ_DB_PATH", "./db/journal.db");
        let cors_allow = var("TJ_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("TJ_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid TJ_REQUEST_TIMEOUT_MS")?;
        let static_dir = var("TJ_STATIC_DIR", "public");
        let home_currency = normalize_currency_code(&var("TJ_HOME_CURRENCY", DEFAULT_HOME_CURRENCY))
            .context("Invalid TJ_HOME_CURRENCY")?;
        let missing_rate_policy: MissingRatePolicy = var("TJ_MISSING_RATE_POLICY", "zero")
            .parse()
            .context("Invalid TJ_MISSING_RATE_POLICY")?;
        let rates_url = var("TJ_RATES_URL", DEFAULT_RATES_URL);
        let refresh_secs: u64 = var("TJ_RATES_REFRESH_SECS", "60")
            .parse()
            .context("Invalid TJ_RATES_REFRESH_SECS")?;
        if refresh_secs == 0 {
            return Err(anyhow!("TJ_RATES_REFRESH_SECS must be greater than zero"));
        }
        let rates_offline = parse_bool(&var("TJ_RATES_OFFLINE", "false"))
            .context("Invalid TJ_RATES_OFFLINE")?;
        let log_format: LogFormat = var("TJ_LOG_FORMAT", "text")
            .parse()
            .context("Invalid TJ_LOG_FORMAT")?;

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            home_currency,
            missing_rate_policy,
            rates_url,
            rates_refresh_interval: Duration::from_secs(refresh_secs),
            rates_offline,
            log_format,
        })
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("expected a boolean, got '{}'", other)),
    }
}
