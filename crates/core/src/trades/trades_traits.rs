use async_trait::async_trait;

use crate::errors::Result;
use crate::trades::trades_model::Trade;

/// Persistence for the trade collection. The collection is stored and
/// rewritten as a whole.
#[async_trait]
pub trait TradeRepositoryTrait: Send + Sync {
    /// Loads the collection in insertion order. A missing collection is empty.
    fn load_trades(&self) -> Result<Vec<Trade>>;

    /// Replaces the stored collection.
    async fn save_trades(&self, trades: Vec<Trade>) -> Result<()>;
}
