use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::calendar_model::{CalendarDay, CalendarMonth, YearMonth};
use crate::fx::round_money;
use crate::stats::{chip_value, DayOutcome};
use crate::trades::Trade;

/// Builds the month grid for `month`, marking `today` when it falls inside.
pub fn build_month<'a>(
    trades: impl IntoIterator<Item = &'a Trade>,
    month: YearMonth,
    today: NaiveDate,
) -> CalendarMonth {
    let mut per_day: HashMap<NaiveDate, (usize, Decimal)> = HashMap::new();
    for trade in trades.into_iter().filter(|t| month.contains(t.date)) {
        let entry = per_day.entry(trade.date).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(trade.converted_amount);
    }

    let first = month.first_day();
    let days = (0..month.days_in_month())
        .filter_map(|offset| first.checked_add_days(chrono::Days::new(offset as u64)))
        .map(|date| {
            let (trade_count, total) = per_day.get(&date).copied().unwrap_or((0, Decimal::ZERO));
            let total = round_money(total);
            let has_trades = trade_count > 0;
            CalendarDay {
                day: date.day(),
                date,
                is_today: date == today,
                trade_count,
                total,
                outcome: has_trades.then(|| DayOutcome::from_total(total)),
                chip: has_trades.then(|| chip_value(total)),
            }
        })
        .collect();

    CalendarMonth {
        year: month.year(),
        month: month.month(),
        title: month.title(),
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}
