use thiserror::Error;

/// Errors raised by the exchange-rate layer.
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Exchange rate not found: {0}")]
    RateNotFound(String),

    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    #[error("Invalid missing-rate policy: {0}")]
    InvalidPolicy(String),
}
