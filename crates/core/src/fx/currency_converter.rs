use rust_decimal::{Decimal, RoundingStrategy};

use super::fx_model::{Conversion, RateTable};
use crate::constants::{DEFAULT_HOME_CURRENCY, DISPLAY_DECIMAL_PRECISION};

/// Converts amounts into a fixed home currency through a pivot-relative table.
///
/// `result = (amount / rate[source]) * rate[home]`, rounded to two decimal
/// places with midpoint-away-from-zero. A missing or zero rate on either side,
/// or an overflowing intermediate, yields [`Conversion::Unavailable`]; nothing
/// here panics or errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyConverter {
    home_currency: String,
}

impl CurrencyConverter {
    pub fn new(home_currency: impl Into<String>) -> Self {
        Self {
            home_currency: home_currency.into(),
        }
    }

    pub fn home_currency(&self) -> &str {
        &self.home_currency
    }

    pub fn convert_amount(
        &self,
        amount: Decimal,
        source_currency: &str,
        rates: &RateTable,
    ) -> Conversion {
        convert_amount(amount, source_currency, rates, &self.home_currency)
    }

    /// Same as [`convert_amount`](Self::convert_amount) with the unavailable
    /// case collapsed to zero.
    pub fn convert(&self, amount: Decimal, source_currency: &str, rates: &RateTable) -> Decimal {
        self.convert_amount(amount, source_currency, rates)
            .unwrap_or_zero()
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new(DEFAULT_HOME_CURRENCY)
    }
}

pub fn convert_amount(
    amount: Decimal,
    source_currency: &str,
    rates: &RateTable,
    home_currency: &str,
) -> Conversion {
    let (Some(source_rate), Some(home_rate)) =
        (rates.rate(source_currency), rates.rate(home_currency))
    else {
        return Conversion::Unavailable;
    };

    match amount
        .checked_div(source_rate)
        .and_then(|pivot| pivot.checked_mul(home_rate))
    {
        Some(value) => Conversion::Converted(round_money(value)),
        None => {
            log::debug!(
                "Conversion of {} {} to {} overflowed",
                amount,
                source_currency,
                home_currency
            );
            Conversion::Unavailable
        }
    }
}

pub fn convert(
    amount: Decimal,
    source_currency: &str,
    rates: &RateTable,
    home_currency: &str,
) -> Decimal {
    convert_amount(amount, source_currency, rates, home_currency).unwrap_or_zero()
}

/// Rounds to display precision, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
