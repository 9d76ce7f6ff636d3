use std::sync::{Arc, RwLock, RwLockReadGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tradejournal_rates::RateProvider;

use super::journal_traits::JournalServiceTrait;
use crate::calendar::{build_month, CalendarMonth, YearMonth};
use crate::dashboard::{DashboardRenderer, DashboardSnapshot, NoOpDashboardRenderer};
use crate::errors::{Error, Result};
use crate::fx::{Conversion, FxError, FxServiceTrait, MissingRatePolicy};
use crate::settings::{SettingsServiceTrait, Theme};
use crate::stats::{
    calculate_stats, counted_trades, day_summary, equity_series, sparkline, DaySummary,
    EquityPoint, Sparkline, TradeStats, WinRateGauge,
};
use crate::trades::{normalize_note, NewTrade, Trade, TradeRepositoryTrait, TradeUpdate};
use crate::utils::time_utils::today;

pub struct JournalService {
    fx_service: Arc<dyn FxServiceTrait>,
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
    renderer: Arc<dyn DashboardRenderer>,
    missing_rate_policy: MissingRatePolicy,
    trades: RwLock<Vec<Trade>>,
    view_month: RwLock<YearMonth>,
    // Serializes "mutate, persist, swap" so concurrent edits never interleave.
    write_lock: Mutex<()>,
}

impl JournalService {
    pub fn new(
        fx_service: Arc<dyn FxServiceTrait>,
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
        missing_rate_policy: MissingRatePolicy,
    ) -> Self {
        Self {
            fx_service,
            trade_repository,
            settings_service,
            renderer: Arc::new(NoOpDashboardRenderer),
            missing_rate_policy,
            trades: RwLock::new(Vec::new()),
            view_month: RwLock::new(YearMonth::from_date(today())),
            write_lock: Mutex::new(()),
        }
    }

    /// Sets the renderer notified after each state change.
    pub fn with_renderer(mut self, renderer: Arc<dyn DashboardRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    fn read_trades(&self) -> RwLockReadGuard<'_, Vec<Trade>> {
        self.trades.read().unwrap_or_else(|e| e.into_inner())
    }

    fn replace_trades(&self, trades: Vec<Trade>) {
        let mut guard = self.trades.write().unwrap_or_else(|e| e.into_inner());
        *guard = trades;
    }

    /// Writes the new collection to the store, then swaps it into memory.
    /// On a storage error memory keeps the previous collection.
    async fn commit(&self, trades: Vec<Trade>) -> Result<()> {
        self.trade_repository.save_trades(trades.clone()).await?;
        self.replace_trades(trades);
        Ok(())
    }

    /// Converts at the current rate, applying the missing-rate policy.
    /// Returns the converted amount and whether conversion was unavailable.
    fn convert_for_entry(&self, amount: Decimal, currency: &str) -> Result<(Decimal, bool)> {
        match self.fx_service.convert(amount, currency) {
            Conversion::Converted(value) => Ok((value, false)),
            Conversion::Unavailable => match self.missing_rate_policy {
                MissingRatePolicy::Error => Err(Error::Fx(FxError::RateNotFound(format!(
                    "{} to {}",
                    currency,
                    self.fx_service.home_currency()
                )))),
                policy => {
                    warn!(
                        "No rate for {} to {}; recording zero ({} policy)",
                        currency,
                        self.fx_service.home_currency(),
                        policy
                    );
                    Ok((Decimal::ZERO, true))
                }
            },
        }
    }

    fn counted(&self, trades: &[Trade]) -> Vec<Trade> {
        counted_trades(trades, self.missing_rate_policy)
            .cloned()
            .collect()
    }

    fn render(&self) {
        match self.snapshot(today()) {
            Ok(snapshot) => self.renderer.render(&snapshot),
            Err(e) => warn!("Skipping dashboard render: {}", e),
        }
    }

    fn not_found(trade_id: &str) -> Error {
        Error::NotFound(format!("Trade {} not found", trade_id))
    }
}

#[async_trait]
impl JournalServiceTrait for JournalService {
    fn initialize(&self) -> Result<usize> {
        let trades = self.trade_repository.load_trades()?;
        let count = trades.len();
        self.replace_trades(trades);
        info!("Loaded {} trades", count);
        Ok(count)
    }

    fn missing_rate_policy(&self) -> MissingRatePolicy {
        self.missing_rate_policy
    }

    async fn record_trade(&self, new_trade: NewTrade) -> Result<Trade> {
        let new_trade = new_trade.validate()?;
        let (converted_amount, conversion_unavailable) =
            self.convert_for_entry(new_trade.amount, &new_trade.currency)?;

        let trade = Trade {
            id: Trade::generate_id(),
            date: new_trade.date,
            currency: new_trade.currency,
            amount: new_trade.amount,
            converted_amount,
            note: new_trade.note,
            conversion_unavailable,
        };

        {
            let _guard = self.write_lock.lock().await;
            let mut trades = self.read_trades().clone();
            trades.push(trade.clone());
            self.commit(trades).await?;
        }

        debug!(
            "Recorded trade {} on {}: {} {} -> {}",
            trade.id, trade.date, trade.amount, trade.currency, trade.converted_amount
        );
        self.render();
        Ok(trade)
    }

    async fn update_trade(&self, trade_id: &str, update: TradeUpdate) -> Result<Trade> {
        let update = update.validate()?;

        let updated = {
            let _guard = self.write_lock.lock().await;
            let mut trades = self.read_trades().clone();
            let trade = trades
                .iter_mut()
                .find(|t| t.id == trade_id)
                .ok_or_else(|| Self::not_found(trade_id))?;

            let currency = update.currency.unwrap_or_else(|| trade.currency.clone());
            let amount = update.amount.unwrap_or(trade.amount);
            if currency != trade.currency || amount != trade.amount {
                let (converted_amount, unavailable) = self.convert_for_entry(amount, &currency)?;
                trade.converted_amount = converted_amount;
                trade.conversion_unavailable = unavailable;
                trade.currency = currency;
                trade.amount = amount;
            }
            if let Some(date) = update.date {
                trade.date = date;
            }
            if update.note.is_some() {
                trade.note = normalize_note(update.note);
            }

            let updated = trade.clone();
            self.commit(trades).await?;
            updated
        };

        self.render();
        Ok(updated)
    }

    async fn delete_trade(&self, trade_id: &str) -> Result<Trade> {
        let removed = {
            let _guard = self.write_lock.lock().await;
            let mut trades = self.read_trades().clone();
            let position = trades
                .iter()
                .position(|t| t.id == trade_id)
                .ok_or_else(|| Self::not_found(trade_id))?;
            let removed = trades.remove(position);
            self.commit(trades).await?;
            removed
        };

        debug!("Deleted trade {}", removed.id);
        self.render();
        Ok(removed)
    }

    fn get_trades(&self) -> Vec<Trade> {
        self.read_trades().clone()
    }

    fn get_trade(&self, trade_id: &str) -> Result<Trade> {
        self.read_trades()
            .iter()
            .find(|t| t.id == trade_id)
            .cloned()
            .ok_or_else(|| Self::not_found(trade_id))
    }

    fn stats(&self) -> TradeStats {
        let trades = self.read_trades();
        calculate_stats(counted_trades(&trades, self.missing_rate_policy))
    }

    fn equity_series(&self) -> Vec<EquityPoint> {
        let trades = self.read_trades();
        equity_series(counted_trades(&trades, self.missing_rate_policy))
    }

    fn sparkline(&self) -> Sparkline {
        sparkline(&self.equity_series())
    }

    fn day_summary(&self, date: NaiveDate) -> DaySummary {
        let trades = self.read_trades();
        day_summary(counted_trades(&trades, self.missing_rate_policy), date)
    }

    fn calendar_month(&self, month: YearMonth, today: NaiveDate) -> CalendarMonth {
        let trades = self.read_trades();
        build_month(
            counted_trades(&trades, self.missing_rate_policy),
            month,
            today,
        )
    }

    fn view_month(&self) -> YearMonth {
        *self.view_month.read().unwrap_or_else(|e| e.into_inner())
    }

    fn set_view_month(&self, month: YearMonth) -> YearMonth {
        {
            let mut guard = self.view_month.write().unwrap_or_else(|e| e.into_inner());
            *guard = month;
        }
        self.render();
        month
    }

    fn shift_view_month(&self, delta: i32) -> YearMonth {
        let shifted = {
            let mut guard = self.view_month.write().unwrap_or_else(|e| e.into_inner());
            *guard = guard.shift(delta);
            *guard
        };
        self.render();
        shifted
    }

    async fn refresh_rates(&self, provider: &dyn RateProvider) -> bool {
        let refreshed = self.fx_service.refresh_rates(provider).await;
        if refreshed {
            self.render();
        }
        refreshed
    }

    fn snapshot(&self, today: NaiveDate) -> Result<DashboardSnapshot> {
        let counted = self.counted(&self.read_trades());
        let stats = calculate_stats(&counted);
        let equity = equity_series(&counted);
        let rates = self.fx_service.current_rates();

        Ok(DashboardSnapshot {
            gauge: WinRateGauge::from_stats(&stats),
            sparkline: sparkline(&equity),
            calendar: build_month(&counted, self.view_month(), today),
            ticker: rates.ticker(),
            rates: (*rates).clone(),
            theme: self.settings_service.get_theme()?,
            home_currency: self.fx_service.home_currency().to_string(),
            stats,
            equity,
        })
    }

    async fn set_theme(&self, theme: Theme) -> Result<Theme> {
        self.settings_service.set_theme(theme).await?;
        self.render();
        Ok(theme)
    }

    async fn toggle_theme(&self) -> Result<Theme> {
        let theme = self.settings_service.toggle_theme().await?;
        self.render();
        Ok(theme)
    }
}
