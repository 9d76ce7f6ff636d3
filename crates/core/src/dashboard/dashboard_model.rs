use serde::{Deserialize, Serialize};

use crate::calendar::CalendarMonth;
use crate::fx::{RateTable, Ticker};
use crate::settings::Theme;
use crate::stats::{EquityPoint, Sparkline, TradeStats, WinRateGauge};

/// Everything the dashboard draws, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub stats: TradeStats,
    pub gauge: WinRateGauge,
    pub equity: Vec<EquityPoint>,
    pub sparkline: Sparkline,
    pub calendar: CalendarMonth,
    pub ticker: Ticker,
    pub rates: RateTable,
    pub theme: Theme,
    pub home_currency: String,
}
