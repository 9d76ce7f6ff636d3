//! Trade Journal Core - Domain entities, services, and traits.
//!
//! This crate contains the journal's business logic: the home-currency
//! converter, trade records, the statistics aggregator and the series
//! derived from it, and the controller that ties them together.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod calendar;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod fx;
pub mod journal;
pub mod settings;
pub mod stats;
pub mod trades;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
