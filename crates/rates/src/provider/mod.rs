//! Rate provider abstractions and implementations.

mod traits;

pub mod open_er_api;
pub mod static_rates;

pub use traits::RateProvider;
