//! SQLite storage implementation for the trade journal.
//!
//! The journal persists two values: the serialized trade collection and the
//! theme preference. Both live in a single `kv_store` table managed by
//! embedded Diesel migrations. This crate implements the repository traits
//! defined in `tradejournal-core` and contains:
//! - Database connection pooling and management
//! - The single-writer actor all writes go through
//! - Repository implementations for trades and settings
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod kv;
pub mod schema;

// Repository implementations
pub mod settings;
pub mod trades;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, open, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use settings::SettingsRepository;
pub use trades::TradeRepository;

// Re-export from tradejournal-core for convenience
pub use tradejournal_core::errors::{DatabaseError, Error, Result};
