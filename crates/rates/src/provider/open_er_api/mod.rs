//! open.er-api.com provider.
//!
//! Fetches the free "latest" table, e.g. `https://open.er-api.com/v6/latest/USD`.
//! The endpoint needs no API key and refreshes roughly once a day, so polling
//! it every minute is cheap but mostly returns the same table.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::RatesError;
use crate::models::LatestRates;
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "OPEN_ER_API";

/// Default endpoint: rates against USD.
pub const DEFAULT_URL: &str = "https://open.er-api.com/v6/latest/USD";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API response from open.er-api.com
#[derive(Debug, Deserialize)]
struct OpenErApiResponse {
    /// "success" or "error"
    result: String,
    /// Present when `result` is "error"
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    base_code: Option<String>,
    time_last_update_unix: Option<i64>,
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// Latest-rates provider backed by open.er-api.com.
pub struct OpenErApiProvider {
    client: Client,
    url: String,
}

impl OpenErApiProvider {
    /// Create a provider for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn parse_response(response: OpenErApiResponse) -> Result<LatestRates, RatesError> {
        if response.result != "success" {
            let reason = response
                .error_type
                .unwrap_or_else(|| format!("result was '{}'", response.result));
            return Err(RatesError::provider(PROVIDER_ID, reason));
        }

        let base = response
            .base_code
            .filter(|code| !code.is_empty())
            .ok_or_else(|| RatesError::invalid_response(PROVIDER_ID, "missing base_code"))?;

        if response.rates.is_empty() {
            return Err(RatesError::invalid_response(PROVIDER_ID, "empty rates"));
        }

        let mut rates = HashMap::with_capacity(response.rates.len());
        for (code, value) in response.rates {
            let rate = Decimal::try_from(value).map_err(|_| {
                RatesError::invalid_response(
                    PROVIDER_ID,
                    format!("rate for {} is not a finite number", code),
                )
            })?;
            rates.insert(code.to_uppercase(), rate);
        }

        let as_of = response
            .time_last_update_unix
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
            .unwrap_or_else(Utc::now);

        Ok(LatestRates::new(base, rates, as_of, PROVIDER_ID))
    }
}

impl Default for OpenErApiProvider {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

#[async_trait]
impl RateProvider for OpenErApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_latest(&self) -> Result<LatestRates, RatesError> {
        log::debug!("Fetching latest rates from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::provider(
                PROVIDER_ID,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        let body: OpenErApiResponse = response
            .json()
            .await
            .map_err(|e| RatesError::invalid_response(PROVIDER_ID, e.to_string()))?;

        let latest = Self::parse_response(body)?;
        log::debug!(
            "Fetched {} rates against {} from {}",
            latest.rates.len(),
            latest.base,
            PROVIDER_ID
        );
        Ok(latest)
    }
}
