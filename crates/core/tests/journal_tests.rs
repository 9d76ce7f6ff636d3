//! Controller tests against in-memory stores.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tradejournal_core::calendar::YearMonth;
use tradejournal_core::dashboard::MockDashboardRenderer;
use tradejournal_core::errors::{DatabaseError, ValidationError};
use tradejournal_core::fx::{FxError, FxService, FxServiceTrait, MissingRatePolicy, RateTable};
use tradejournal_core::journal::{JournalService, JournalServiceTrait};
use tradejournal_core::settings::{SettingsRepositoryTrait, SettingsService, Theme};
use tradejournal_core::stats::Trend;
use tradejournal_core::trades::{NewTrade, Trade, TradeRepositoryTrait, TradeUpdate};
use tradejournal_core::{Error, Result};
use tradejournal_rates::StaticRateProvider;

#[derive(Default)]
struct InMemoryTrades {
    stored: Mutex<Vec<Trade>>,
    saves: Mutex<usize>,
    fail_writes: AtomicBool,
}

#[async_trait]
impl TradeRepositoryTrait for InMemoryTrades {
    fn load_trades(&self) -> Result<Vec<Trade>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save_trades(&self, trades: Vec<Trade>) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DatabaseError::QueryFailed("disk full".to_string()).into());
        }
        *self.stored.lock().unwrap() = trades;
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

#[derive(Default)]
struct InMemorySettings {
    values: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl SettingsRepositoryTrait for InMemorySettings {
    fn get_setting(&self, setting_key: &str) -> Result<String> {
        self.values
            .lock()
            .unwrap()
            .get(setting_key)
            .cloned()
            .ok_or_else(|| DatabaseError::NotFound(setting_key.to_string()).into())
    }

    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(setting_key.to_string(), setting_value.to_string());
        Ok(())
    }
}

struct Harness {
    journal: JournalService,
    fx: Arc<FxService>,
    trades: Arc<InMemoryTrades>,
    renderer: MockDashboardRenderer,
}

fn harness(policy: MissingRatePolicy) -> Harness {
    let fx = Arc::new(FxService::new("SGD"));
    let trades = Arc::new(InMemoryTrades::default());
    let settings = Arc::new(SettingsService::new(
        Arc::new(InMemorySettings::default()),
        "SGD",
        policy,
    ));
    let renderer = MockDashboardRenderer::new();
    let journal = JournalService::new(fx.clone(), trades.clone(), settings, policy)
        .with_renderer(Arc::new(renderer.clone()));
    Harness {
        journal,
        fx,
        trades,
        renderer,
    }
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn new_trade(day: &str, currency: &str, amount: Decimal) -> NewTrade {
    NewTrade {
        date: date(day),
        currency: currency.to_string(),
        amount,
        note: None,
    }
}

#[tokio::test]
async fn test_record_converts_persists_and_renders() {
    let h = harness(MissingRatePolicy::Zero);

    let trade = h
        .journal
        .record_trade(NewTrade {
            note: Some("  opening range  ".to_string()),
            ..new_trade("2026-10-05", "usd", dec!(100))
        })
        .await
        .unwrap();

    assert_eq!(trade.currency, "USD");
    assert_eq!(trade.converted_amount, dec!(135.00));
    assert_eq!(trade.note.as_deref(), Some("opening range"));
    assert!(!trade.conversion_unavailable);

    assert_eq!(h.trades.load_trades().unwrap(), vec![trade.clone()]);
    assert_eq!(h.journal.get_trade(&trade.id).unwrap(), trade);
    assert_eq!(h.renderer.len(), 1);
    assert_eq!(h.renderer.last().unwrap().stats.trade_count, 1);
}

#[tokio::test]
async fn test_ids_are_unique_and_insertion_order_is_kept() {
    let h = harness(MissingRatePolicy::Zero);
    let first = h
        .journal
        .record_trade(new_trade("2026-10-09", "USD", dec!(1)))
        .await
        .unwrap();
    let second = h
        .journal
        .record_trade(new_trade("2026-10-01", "USD", dec!(2)))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    let ids: Vec<String> = h.journal.get_trades().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_stats_and_series_follow_recorded_trades() {
    let h = harness(MissingRatePolicy::Zero);
    h.journal
        .record_trade(new_trade("2026-10-02", "USD", dec!(100)))
        .await
        .unwrap();
    h.journal
        .record_trade(new_trade("2026-10-01", "USD", dec!(-50)))
        .await
        .unwrap();

    let stats = h.journal.stats();
    assert_eq!(stats.total, dec!(67.50));
    assert_eq!(stats.win_rate, 50);

    let values: Vec<Decimal> = h.journal.equity_series().iter().map(|p| p.value).collect();
    assert_eq!(values, vec![dec!(-67.50), dec!(67.50)]);
    assert_eq!(h.journal.sparkline().trend, Trend::Up);

    let day = h.journal.day_summary(date("2026-10-01"));
    assert_eq!(day.count, 1);
    assert_eq!(day.total, dec!(-67.50));
}

#[tokio::test]
async fn test_missing_rate_zero_policy_records_flagged_zero() {
    let h = harness(MissingRatePolicy::Zero);
    let trade = h
        .journal
        .record_trade(new_trade("2026-10-05", "EUR", dec!(100)))
        .await
        .unwrap();

    assert_eq!(trade.converted_amount, Decimal::ZERO);
    assert!(trade.conversion_unavailable);
    assert_eq!(h.journal.stats().trade_count, 1);
}

#[tokio::test]
async fn test_missing_rate_exclude_policy_drops_from_totals() {
    let h = harness(MissingRatePolicy::Exclude);
    h.journal
        .record_trade(new_trade("2026-10-05", "USD", dec!(10)))
        .await
        .unwrap();
    h.journal
        .record_trade(new_trade("2026-10-05", "EUR", dec!(100)))
        .await
        .unwrap();

    assert_eq!(h.journal.get_trades().len(), 2);
    let stats = h.journal.stats();
    assert_eq!(stats.trade_count, 1);
    assert_eq!(stats.win_rate, 100);
    assert_eq!(h.journal.equity_series().len(), 1);
    assert_eq!(h.journal.day_summary(date("2026-10-05")).count, 1);
}

#[tokio::test]
async fn test_missing_rate_error_policy_rejects() {
    let h = harness(MissingRatePolicy::Error);
    let err = h
        .journal
        .record_trade(new_trade("2026-10-05", "EUR", dec!(100)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Fx(FxError::RateNotFound(_))));
    assert!(h.journal.get_trades().is_empty());
    assert!(h.trades.load_trades().unwrap().is_empty());
    assert!(h.renderer.is_empty());
}

#[tokio::test]
async fn test_invalid_currency_is_a_validation_error() {
    let h = harness(MissingRatePolicy::Zero);
    let err = h
        .journal
        .record_trade(new_trade("2026-10-05", "EURO", dec!(1)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidCurrency(_))
    ));
}

#[tokio::test]
async fn test_note_edit_keeps_converted_amount_after_rate_change() {
    let h = harness(MissingRatePolicy::Zero);
    let trade = h
        .journal
        .record_trade(new_trade("2026-10-05", "USD", dec!(100)))
        .await
        .unwrap();

    let mut rates = (*h.fx.current_rates()).clone();
    rates.rates.insert("SGD".to_string(), dec!(1.40));
    h.fx.replace_rates(rates);

    let edited = h
        .journal
        .update_trade(
            &trade.id,
            TradeUpdate {
                note: Some("revisited".to_string()),
                currency: Some("usd".to_string()),
                amount: Some(dec!(100.00)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.converted_amount, dec!(135.00));
    assert_eq!(edited.note.as_deref(), Some("revisited"));

    let reconverted = h
        .journal
        .update_trade(
            &trade.id,
            TradeUpdate {
                amount: Some(dec!(10)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(reconverted.converted_amount, dec!(14.00));
    assert_eq!(reconverted.note.as_deref(), Some("revisited"));
}

#[tokio::test]
async fn test_update_can_move_date_and_clear_note() {
    let h = harness(MissingRatePolicy::Zero);
    let trade = h
        .journal
        .record_trade(NewTrade {
            note: Some("x".to_string()),
            ..new_trade("2026-10-05", "USD", dec!(1))
        })
        .await
        .unwrap();

    let edited = h
        .journal
        .update_trade(
            &trade.id,
            TradeUpdate {
                date: Some(date("2026-10-06")),
                note: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.date, date("2026-10-06"));
    assert_eq!(edited.note, None);
    assert_eq!(edited.converted_amount, trade.converted_amount);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let h = harness(MissingRatePolicy::Zero);
    assert!(matches!(
        h.journal.get_trade("nope"),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        h.journal
            .update_trade("nope", TradeUpdate::default())
            .await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        h.journal.delete_trade("nope").await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_removes_and_persists() {
    let h = harness(MissingRatePolicy::Zero);
    let keep = h
        .journal
        .record_trade(new_trade("2026-10-05", "USD", dec!(1)))
        .await
        .unwrap();
    let dropped = h
        .journal
        .record_trade(new_trade("2026-10-05", "USD", dec!(2)))
        .await
        .unwrap();

    let removed = h.journal.delete_trade(&dropped.id).await.unwrap();
    assert_eq!(removed.id, dropped.id);
    assert_eq!(h.journal.get_trades(), vec![keep.clone()]);
    assert_eq!(h.trades.load_trades().unwrap(), vec![keep]);
}

#[tokio::test]
async fn test_storage_failure_leaves_memory_unchanged() {
    let h = harness(MissingRatePolicy::Zero);
    let trade = h
        .journal
        .record_trade(new_trade("2026-10-05", "USD", dec!(1)))
        .await
        .unwrap();
    h.trades.fail_writes.store(true, Ordering::SeqCst);

    assert!(h
        .journal
        .record_trade(new_trade("2026-10-06", "USD", dec!(1)))
        .await
        .is_err());
    assert!(h.journal.delete_trade(&trade.id).await.is_err());
    assert_eq!(h.journal.get_trades(), vec![trade]);
    assert_eq!(*h.trades.saves.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_initialize_loads_stored_collection() {
    let h = harness(MissingRatePolicy::Zero);
    h.trades
        .save_trades(vec![Trade {
            id: "stored".to_string(),
            date: date("2026-09-30"),
            currency: "USD".to_string(),
            amount: dec!(5),
            converted_amount: dec!(6.75),
            note: None,
            conversion_unavailable: false,
        }])
        .await
        .unwrap();

    assert_eq!(h.journal.initialize().unwrap(), 1);
    assert_eq!(h.journal.get_trade("stored").unwrap().converted_amount, dec!(6.75));
}

#[tokio::test]
async fn test_refresh_rates_success_and_failure() {
    let h = harness(MissingRatePolicy::Zero);
    let good = StaticRateProvider::new(
        "USD",
        HashMap::from([("USD".to_string(), dec!(1)), ("SGD".to_string(), dec!(1.3))]),
    );
    assert!(h.journal.refresh_rates(&good).await);
    assert_eq!(h.renderer.len(), 1);
    assert_eq!(h.fx.current_rates().rate("SGD"), Some(dec!(1.3)));

    let failing = StaticRateProvider::new("USD", HashMap::new());
    assert!(!h.journal.refresh_rates(&failing).await);
    assert_eq!(h.renderer.len(), 1);
    assert_eq!(h.fx.current_rates().rate("SGD"), Some(dec!(1.3)));
}

#[tokio::test]
async fn test_converted_amounts_survive_rate_refresh() {
    let h = harness(MissingRatePolicy::Zero);
    let trade = h
        .journal
        .record_trade(new_trade("2026-10-05", "USD", dec!(100)))
        .await
        .unwrap();
    h.fx.replace_rates(RateTable::new(
        "USD",
        [("USD".to_string(), dec!(1)), ("SGD".to_string(), dec!(2))]
            .into_iter()
            .collect(),
    ));
    assert_eq!(
        h.journal.get_trade(&trade.id).unwrap().converted_amount,
        dec!(135.00)
    );
}

#[tokio::test]
async fn test_view_month_navigation_and_snapshot() {
    let h = harness(MissingRatePolicy::Zero);
    h.journal
        .set_view_month(YearMonth::new(2026, 12).unwrap());
    assert_eq!(h.journal.shift_view_month(1), YearMonth::new(2027, 1).unwrap());
    assert_eq!(h.journal.shift_view_month(-2), YearMonth::new(2026, 11).unwrap());
    assert_eq!(h.journal.view_month(), YearMonth::new(2026, 11).unwrap());

    let snapshot = h.journal.snapshot(date("2026-11-03")).unwrap();
    assert_eq!(snapshot.calendar.title, "November 2026");
    assert!(snapshot.calendar.days[2].is_today);
    assert_eq!(snapshot.home_currency, "SGD");
    assert_eq!(snapshot.theme, Theme::Dark);
    assert_eq!(snapshot.ticker.line, "LIVE MARKETS :: SGD: 1.350 | ");
    assert_eq!(snapshot.gauge.remainder, 100);
    assert_eq!(h.renderer.len(), 3);
}

#[tokio::test]
async fn test_theme_changes_render() {
    let h = harness(MissingRatePolicy::Zero);
    assert_eq!(h.journal.toggle_theme().await.unwrap(), Theme::Light);
    assert_eq!(h.renderer.last().unwrap().theme, Theme::Light);
    assert_eq!(h.journal.set_theme(Theme::Dark).await.unwrap(), Theme::Dark);
    assert_eq!(h.renderer.len(), 2);
}

#[tokio::test]
async fn test_huge_amounts_keep_every_view_available() {
    let h = harness(MissingRatePolicy::Zero);
    let huge = Decimal::from_i128_with_scale(5 * 10_i128.pow(28), 0);

    for day in ["2026-10-05", "2026-10-06"] {
        let trade = h
            .journal
            .record_trade(new_trade(day, "USD", huge))
            .await
            .unwrap();
        assert!(!trade.conversion_unavailable);
    }

    assert_eq!(h.journal.stats().total, Decimal::MAX);
    assert_eq!(h.journal.equity_series().last().unwrap().value, Decimal::MAX);
    assert_eq!(h.journal.day_summary(date("2026-10-06")).count, 1);
    let month = h
        .journal
        .calendar_month(YearMonth::new(2026, 10).unwrap(), date("2026-10-19"));
    assert_eq!(month.days[5].trade_count, 1);
    assert!(h.journal.snapshot(date("2026-10-19")).is_ok());
    assert_eq!(h.renderer.len(), 2);
}
