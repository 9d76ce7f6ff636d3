use async_trait::async_trait;
use chrono::NaiveDate;
use tradejournal_rates::RateProvider;

use crate::calendar::{CalendarMonth, YearMonth};
use crate::dashboard::DashboardSnapshot;
use crate::errors::Result;
use crate::fx::MissingRatePolicy;
use crate::settings::Theme;
use crate::stats::{DaySummary, EquityPoint, Sparkline, TradeStats};
use crate::trades::{NewTrade, Trade, TradeUpdate};

/// The journal controller: owns the trade collection, the calendar view month
/// and the wiring between converter, store and renderer.
#[async_trait]
pub trait JournalServiceTrait: Send + Sync {
    /// Loads the stored collection into memory, returning the trade count.
    fn initialize(&self) -> Result<usize>;

    fn missing_rate_policy(&self) -> MissingRatePolicy;

    async fn record_trade(&self, new_trade: NewTrade) -> Result<Trade>;

    /// Edits a trade. The converted amount is recomputed only when the
    /// currency or amount actually changes.
    async fn update_trade(&self, trade_id: &str, update: TradeUpdate) -> Result<Trade>;

    async fn delete_trade(&self, trade_id: &str) -> Result<Trade>;

    fn get_trades(&self) -> Vec<Trade>;

    fn get_trade(&self, trade_id: &str) -> Result<Trade>;

    fn stats(&self) -> TradeStats;

    fn equity_series(&self) -> Vec<EquityPoint>;

    fn sparkline(&self) -> Sparkline;

    fn day_summary(&self, date: NaiveDate) -> DaySummary;

    fn calendar_month(&self, month: YearMonth, today: NaiveDate) -> CalendarMonth;

    fn view_month(&self) -> YearMonth;

    fn set_view_month(&self, month: YearMonth) -> YearMonth;

    fn shift_view_month(&self, delta: i32) -> YearMonth;

    /// One fetch from `provider`. Returns whether the table was replaced.
    async fn refresh_rates(&self, provider: &dyn RateProvider) -> bool;

    fn snapshot(&self, today: NaiveDate) -> Result<DashboardSnapshot>;

    async fn set_theme(&self, theme: Theme) -> Result<Theme>;

    async fn toggle_theme(&self) -> Result<Theme>;
}
