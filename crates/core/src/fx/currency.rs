//! Currency code handling.

use super::fx_errors::FxError;

/// Trims and upper-cases a user supplied currency code.
///
/// Codes must be exactly three ASCII letters ("usd" -> "USD"). Membership in
/// [`SUPPORTED_CURRENCIES`](crate::constants::SUPPORTED_CURRENCIES) is not
/// enforced: any well-formed code is accepted and simply converts to the
/// unavailable fallback when the rate table lacks it.
pub fn normalize_currency_code(code: &str) -> Result<String, FxError> {
    let trimmed = code.trim();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FxError::InvalidCurrencyCode(code.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}
