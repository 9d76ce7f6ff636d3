//! SQLite storage implementation for settings.

mod repository;

pub use repository::SettingsRepository;

// Re-export trait from core for convenience
pub use tradejournal_core::settings::SettingsRepositoryTrait;
