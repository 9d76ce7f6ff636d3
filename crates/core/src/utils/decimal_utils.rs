use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serializer;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Serializes a money amount as a string with exactly two decimals
/// (`50` -> `"50.00"`, `-0.125` -> `"-0.13"`).
pub fn serialize_decimal_2<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_decimal_2(*value))
}

pub fn format_decimal_2(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    format!("{:.2}", rounded)
}
