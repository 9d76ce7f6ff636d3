//! Journal module - the controller that owns the journal's mutable state.

mod journal_service;
mod journal_traits;

pub use journal_service::JournalService;
pub use journal_traits::JournalServiceTrait;
