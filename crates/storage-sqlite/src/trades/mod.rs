//! SQLite storage implementation for the trade collection.

mod repository;

pub use repository::TradeRepository;

// Re-export trait from core for convenience
pub use tradejournal_core::trades::TradeRepositoryTrait;
