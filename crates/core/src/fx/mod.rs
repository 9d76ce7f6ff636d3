//! FX module - rate tables, the home-currency converter and the rate cache.

pub mod currency;
pub mod currency_converter;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;

pub use currency::normalize_currency_code;
pub use currency_converter::{convert, convert_amount, round_money, CurrencyConverter};
pub use fx_errors::FxError;
pub use fx_model::{Conversion, MissingRatePolicy, RateTable, Ticker, TickerEntry};
pub use fx_service::FxService;
pub use fx_traits::FxServiceTrait;
