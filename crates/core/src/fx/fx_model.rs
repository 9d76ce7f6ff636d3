use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tradejournal_rates::LatestRates;

use super::fx_errors::FxError;
use crate::constants::{
    DEFAULT_HOME_CURRENCY, DEFAULT_PIVOT_CURRENCY, TICKER_CURRENCIES, TICKER_DECIMAL_PRECISION,
};

/// Prefix of the rendered ticker line.
const TICKER_PREFIX: &str = "LIVE MARKETS :: ";

/// A pivot-relative exchange-rate snapshot.
///
/// `rates[code]` is the number of units of `code` one unit of `base` buys.
/// Tables are replaced wholesale on refresh and never merged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    pub base: String,
    pub rates: BTreeMap<String, Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RateTable {
    pub fn new(base: impl Into<String>, rates: BTreeMap<String, Decimal>) -> Self {
        Self {
            base: base.into(),
            rates,
            updated_at: None,
        }
    }

    /// The table used before any refresh has succeeded.
    pub fn default_table() -> Self {
        Self::new(
            DEFAULT_PIVOT_CURRENCY,
            BTreeMap::from([
                (DEFAULT_PIVOT_CURRENCY.to_string(), Decimal::ONE),
                (DEFAULT_HOME_CURRENCY.to_string(), dec!(1.35)),
            ]),
        )
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Exact-key lookup. A zero rate is reported as absent.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied().filter(|r| !r.is_zero())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rate(code).is_some()
    }

    /// Ticker entries for the fixed display currencies, in display order.
    /// Codes the table lacks are skipped.
    pub fn ticker(&self) -> Ticker {
        let entries: Vec<TickerEntry> = TICKER_CURRENCIES
            .iter()
            .filter_map(|code| {
                self.rates.get(*code).map(|rate| TickerEntry {
                    currency: (*code).to_string(),
                    rate: rate.round_dp_with_strategy(
                        TICKER_DECIMAL_PRECISION,
                        RoundingStrategy::MidpointAwayFromZero,
                    ),
                })
            })
            .collect();

        let mut line = String::from(TICKER_PREFIX);
        for entry in &entries {
            line.push_str(&format!(
                "{}: {:.prec$} | ",
                entry.currency,
                entry.rate,
                prec = TICKER_DECIMAL_PRECISION as usize
            ));
        }

        Ticker { entries, line }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::default_table()
    }
}

impl From<LatestRates> for RateTable {
    fn from(latest: LatestRates) -> Self {
        let rates: BTreeMap<String, Decimal> = latest.rates.into_iter().collect();
        Self {
            base: latest.base,
            rates,
            updated_at: Some(latest.as_of),
        }
    }
}

impl From<RateTable> for HashMap<String, Decimal> {
    fn from(table: RateTable) -> Self {
        table.rates.into_iter().collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TickerEntry {
    pub currency: String,
    pub rate: Decimal,
}

/// The live-markets strip: per-currency entries plus the rendered line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    pub entries: Vec<TickerEntry>,
    pub line: String,
}

/// What to do with a trade whose currency has no usable rate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingRatePolicy {
    /// Record a converted amount of zero and count the trade everywhere.
    #[default]
    Zero,
    /// Record as zero but leave the trade out of totals and series.
    Exclude,
    /// Reject the trade.
    Error,
}

impl MissingRatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingRatePolicy::Zero => "zero",
            MissingRatePolicy::Exclude => "exclude",
            MissingRatePolicy::Error => "error",
        }
    }
}

impl fmt::Display for MissingRatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingRatePolicy {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(MissingRatePolicy::Zero),
            "exclude" => Ok(MissingRatePolicy::Exclude),
            "error" => Ok(MissingRatePolicy::Error),
            _ => Err(FxError::InvalidPolicy(s.to_string())),
        }
    }
}

/// Result of converting an amount into the home currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Converted(Decimal),
    /// The table lacked (or zeroed) the source or home rate.
    Unavailable,
}

impl Conversion {
    pub fn is_available(&self) -> bool {
        matches!(self, Conversion::Converted(_))
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            Conversion::Converted(v) => Some(*v),
            Conversion::Unavailable => None,
        }
    }

    pub fn unwrap_or_zero(self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }
}
