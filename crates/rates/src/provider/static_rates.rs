//! Fixed-table provider for offline mode and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::errors::RatesError;
use crate::models::LatestRates;
use crate::provider::RateProvider;

const PROVIDER_ID: &str = "STATIC";

/// Always answers with the same table, stamped with the current time.
#[derive(Clone, Debug)]
pub struct StaticRateProvider {
    base: String,
    rates: HashMap<String, Decimal>,
}

impl StaticRateProvider {
    pub fn new(base: impl Into<String>, rates: HashMap<String, Decimal>) -> Self {
        Self {
            base: base.into(),
            rates,
        }
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_latest(&self) -> Result<LatestRates, RatesError> {
        if self.rates.is_empty() {
            return Err(RatesError::invalid_response(PROVIDER_ID, "empty rates"));
        }
        Ok(LatestRates::new(
            self.base.clone(),
            self.rates.clone(),
            Utc::now(),
            PROVIDER_ID,
        ))
    }
}
