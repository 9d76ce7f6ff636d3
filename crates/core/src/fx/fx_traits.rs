use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tradejournal_rates::RateProvider;

use super::fx_model::{Conversion, RateTable, Ticker};

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    fn home_currency(&self) -> &str;

    /// Snapshot of the current table. Never partially updated.
    fn current_rates(&self) -> Arc<RateTable>;

    /// Swaps in a new table wholesale.
    fn replace_rates(&self, table: RateTable);

    fn convert(&self, amount: Decimal, source_currency: &str) -> Conversion;

    fn ticker(&self) -> Ticker;

    /// Fetches once from `provider`. On failure the last-known table is kept
    /// and `false` is returned; provider errors are logged, never propagated.
    async fn refresh_rates(&self, provider: &dyn RateProvider) -> bool;
}
