use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use rust_decimal::Decimal;
use tradejournal_rates::RateProvider;

use super::currency_converter::CurrencyConverter;
use super::fx_model::{Conversion, RateTable, Ticker};
use super::fx_traits::FxServiceTrait;

#[derive(Clone)]
pub struct FxService {
    converter: CurrencyConverter,
    rates: Arc<RwLock<Arc<RateTable>>>,
}

impl FxService {
    pub fn new(home_currency: impl Into<String>) -> Self {
        Self::with_rates(home_currency, RateTable::default_table())
    }

    pub fn with_rates(home_currency: impl Into<String>, table: RateTable) -> Self {
        Self {
            converter: CurrencyConverter::new(home_currency),
            rates: Arc::new(RwLock::new(Arc::new(table))),
        }
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    fn home_currency(&self) -> &str {
        self.converter.home_currency()
    }

    fn current_rates(&self) -> Arc<RateTable> {
        // A poisoned lock still holds a complete table; the swap is a single assignment.
        let guard = self.rates.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    fn replace_rates(&self, table: RateTable) {
        let table = Arc::new(table);
        let mut guard = self.rates.write().unwrap_or_else(|e| e.into_inner());
        *guard = table;
    }

    fn convert(&self, amount: Decimal, source_currency: &str) -> Conversion {
        let rates = self.current_rates();
        self.converter
            .convert_amount(amount, source_currency, &rates)
    }

    fn ticker(&self) -> Ticker {
        self.current_rates().ticker()
    }

    async fn refresh_rates(&self, provider: &dyn RateProvider) -> bool {
        match provider.fetch_latest().await {
            Ok(latest) => {
                let table = RateTable::from(latest);
                if !table.contains(self.home_currency()) {
                    log::warn!(
                        "Rate table from {} has no {} rate; conversions will be unavailable",
                        provider.id(),
                        self.home_currency()
                    );
                }
                log::debug!(
                    "Replacing rate table with {} rates against {} from {}",
                    table.rates.len(),
                    table.base,
                    provider.id()
                );
                self.replace_rates(table);
                true
            }
            Err(e) => {
                log::warn!(
                    "Rate refresh from {} failed, offline mode: {}",
                    provider.id(),
                    e
                );
                false
            }
        }
    }
}
