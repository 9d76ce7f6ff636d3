use async_trait::async_trait;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::kv::{read_value, write_value};
use tradejournal_core::errors::{DatabaseError, Result};
use tradejournal_core::settings::SettingsRepositoryTrait;

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_setting(&self, setting_key: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;
        read_value(&mut conn, setting_key)
            .into_core()?
            .ok_or_else(|| DatabaseError::NotFound(format!("setting '{}'", setting_key)).into())
    }

    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()> {
        let key = setting_key.to_string();
        let value = setting_value.to_string();
        self.writer
            .exec(move |conn| {
                write_value(conn, &key, &value).into_core()?;
                Ok(())
            })
            .await
    }
}
