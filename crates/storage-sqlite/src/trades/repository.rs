use async_trait::async_trait;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::kv::{read_value, write_value};
use tradejournal_core::constants::TRADES_STORE_KEY;
use tradejournal_core::errors::Result;
use tradejournal_core::trades::{Trade, TradeRepositoryTrait};

/// Stores the whole collection as one JSON array under a single key.
pub struct TradeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TradeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TradeRepository { pool, writer }
    }
}

#[async_trait]
impl TradeRepositoryTrait for TradeRepository {
    fn load_trades(&self) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;
        match read_value(&mut conn, TRADES_STORE_KEY).into_core()? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save_trades(&self, trades: Vec<Trade>) -> Result<()> {
        let json = serde_json::to_string(&trades)?;
        log::debug!("Saving {} trades", trades.len());
        self.writer
            .exec(move |conn| {
                write_value(conn, TRADES_STORE_KEY, &json).into_core()?;
                Ok(())
            })
            .await
    }
}
