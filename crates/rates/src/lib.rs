//! Trade Journal Rates Crate
//!
//! Fetches pivot-relative exchange-rate tables for the journal. A rate
//! table maps currency codes to the number of units of that currency one
//! unit of the pivot (`base`) buys.
//!
//! # Providers
//!
//! - [`OpenErApiProvider`] - the public `open.er-api.com` latest-rates endpoint
//! - [`StaticRateProvider`] - a fixed table, used for offline mode and tests
//!
//! Providers make a single request per call. Scheduling and the decision to
//! keep a stale table on failure belong to the caller.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::RatesError;
pub use models::LatestRates;
pub use provider::open_er_api::OpenErApiProvider;
pub use provider::static_rates::StaticRateProvider;
pub use provider::RateProvider;
