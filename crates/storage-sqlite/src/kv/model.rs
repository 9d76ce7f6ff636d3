//! Database model for key-value entries.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of `kv_store`.
#[derive(Queryable, Selectable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::kv_store)]
#[serde(rename_all = "camelCase")]
pub struct KvEntryDB {
    pub store_key: String,
    pub store_value: String,
}
