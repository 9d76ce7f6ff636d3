//! Stats module - the aggregator and the series derived from it.

mod stats_calculator;
mod stats_model;

pub use stats_calculator::{
    calculate_stats, calculate_stats_with_policy, chip_value, counted_trades, day_summary,
    equity_series, sparkline,
};
pub use stats_model::{
    DayOutcome, DaySummary, EquityPoint, Sparkline, TradeStats, Trend, WinRateGauge,
};
