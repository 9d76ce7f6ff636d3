use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A freshly fetched, pivot-relative rate table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestRates {
    /// Pivot currency every rate is expressed against (e.g. "USD").
    pub base: String,

    /// Currency code -> units of that currency per one unit of `base`.
    pub rates: HashMap<String, Decimal>,

    /// When the provider last updated the table.
    pub as_of: DateTime<Utc>,

    /// Provider identifier (OPEN_ER_API, STATIC, ...)
    pub source: String,
}

impl LatestRates {
    pub fn new(
        base: impl Into<String>,
        rates: HashMap<String, Decimal>,
        as_of: DateTime<Utc>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            rates,
            as_of,
            source: source.into(),
        }
    }
}
