//! Summary statistics and derived series.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::trades::Trade;
use crate::utils::decimal_utils::serialize_decimal_2;

/// Aggregate over a trade collection.
///
/// `total` and `winRate` serialize as strings (`{"total":"50.00","winRate":"50"}`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeStats {
    #[serde(serialize_with = "serialize_decimal_2")]
    pub total: Decimal,
    /// Whole percent of trades with a strictly positive converted amount.
    #[serde_as(as = "DisplayFromStr")]
    pub win_rate: u32,
    pub trade_count: usize,
    pub wins: usize,
    pub losses: usize,
}

impl Default for TradeStats {
    fn default() -> Self {
        Self {
            total: Decimal::ZERO,
            win_rate: 0,
            trade_count: 0,
            wins: 0,
            losses: 0,
        }
    }
}

/// Half-doughnut gauge split: `win + remainder == 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinRateGauge {
    pub win: u32,
    pub remainder: u32,
}

impl WinRateGauge {
    pub fn from_stats(stats: &TradeStats) -> Self {
        let win = stats.win_rate.min(100);
        Self {
            win,
            remainder: 100 - win,
        }
    }
}

/// One point of the cumulative equity curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPoint {
    pub index: usize,
    pub date: NaiveDate,
    pub trade_id: String,
    #[serde(serialize_with = "serialize_decimal_2")]
    pub value: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Abbreviated equity curve: the cumulative values and the line direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sparkline {
    pub values: Vec<Decimal>,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOutcome {
    Win,
    Loss,
}

impl DayOutcome {
    /// A day with a non-negative total counts as a win.
    pub fn from_total(total: Decimal) -> Self {
        if total >= Decimal::ZERO {
            DayOutcome::Win
        } else {
            DayOutcome::Loss
        }
    }
}

/// Trades of a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub trades: Vec<Trade>,
    pub count: usize,
    #[serde(serialize_with = "serialize_decimal_2")]
    pub total: Decimal,
    pub outcome: DayOutcome,
    /// Absolute total in whole units, as shown on the calendar chip.
    pub chip: Decimal,
}
