//! Trades module - journal entries and their persistence contract.

mod trades_model;
mod trades_traits;

pub use trades_model::{normalize_note, NewTrade, Trade, TradeUpdate};
pub use trades_traits::TradeRepositoryTrait;
