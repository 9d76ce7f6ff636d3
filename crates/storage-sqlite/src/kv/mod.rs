//! Key-value access shared by the repositories.
//!
//! Every value is an opaque string; callers choose the encoding.

mod model;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

pub use model::KvEntryDB;

use crate::schema::kv_store::dsl::*;

/// Reads the value stored under `key`, if any.
pub fn read_value(conn: &mut SqliteConnection, key: &str) -> QueryResult<Option<String>> {
    kv_store
        .filter(store_key.eq(key))
        .select(store_value)
        .first::<String>(conn)
        .optional()
}

/// Inserts or replaces the value under `key`.
pub fn write_value(conn: &mut SqliteConnection, key: &str, value: &str) -> QueryResult<usize> {
    diesel::replace_into(kv_store)
        .values(&KvEntryDB {
            store_key: key.to_string(),
            store_value: value.to_string(),
        })
        .execute(conn)
}
