use chrono::NaiveDate;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::stats_model::{
    DayOutcome, DaySummary, EquityPoint, Sparkline, TradeStats, Trend,
};
use crate::fx::{round_money, MissingRatePolicy};
use crate::trades::Trade;

/// Reduces a trade collection to its total and win rate.
///
/// Order-independent and total: an empty collection yields `0.00` / `0`.
/// Zero amounts count toward the denominator but are neither wins nor losses.
/// Sums saturate at the bounds of `Decimal` instead of overflowing.
pub fn calculate_stats<'a>(trades: impl IntoIterator<Item = &'a Trade>) -> TradeStats {
    let mut total = Decimal::ZERO;
    let mut count = 0usize;
    let mut wins = 0usize;
    let mut losses = 0usize;

    for trade in trades {
        total = total.saturating_add(trade.converted_amount);
        count += 1;
        if trade.is_win() {
            wins += 1;
        } else if trade.is_loss() {
            losses += 1;
        }
    }

    TradeStats {
        total: round_money(total),
        win_rate: win_rate(wins, count),
        trade_count: count,
        wins,
        losses,
    }
}

/// [`calculate_stats`] over the trades the policy counts.
pub fn calculate_stats_with_policy(trades: &[Trade], policy: MissingRatePolicy) -> TradeStats {
    calculate_stats(counted_trades(trades, policy))
}

/// Trades that take part in totals and series under `policy`.
pub fn counted_trades(
    trades: &[Trade],
    policy: MissingRatePolicy,
) -> impl Iterator<Item = &Trade> + Clone {
    trades
        .iter()
        .filter(move |t| !(policy == MissingRatePolicy::Exclude && t.conversion_unavailable))
}

fn win_rate(wins: usize, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    (Decimal::from(wins) * Decimal::ONE_HUNDRED / Decimal::from(count))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Running sum of converted amounts, trades ordered by date.
///
/// The sort is stable: trades sharing a date keep their insertion order.
pub fn equity_series<'a>(trades: impl IntoIterator<Item = &'a Trade>) -> Vec<EquityPoint> {
    let mut sorted: Vec<&Trade> = trades.into_iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut running = Decimal::ZERO;
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, trade)| {
            running = running.saturating_add(trade.converted_amount);
            EquityPoint {
                index,
                date: trade.date,
                trade_id: trade.id.clone(),
                value: running,
            }
        })
        .collect()
}

pub fn sparkline(series: &[EquityPoint]) -> Sparkline {
    let values: Vec<Decimal> = series.iter().map(|p| p.value).collect();
    let trend = match values.last() {
        Some(last) if *last < Decimal::ZERO => Trend::Down,
        _ => Trend::Up,
    };
    Sparkline { values, trend }
}

/// Trades recorded on `date`, in insertion order, with their signed total.
pub fn day_summary<'a>(
    trades: impl IntoIterator<Item = &'a Trade>,
    date: NaiveDate,
) -> DaySummary {
    let day_trades: Vec<Trade> = trades
        .into_iter()
        .filter(|t| t.date == date)
        .cloned()
        .collect();
    let total = round_money(
        day_trades
            .iter()
            .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.converted_amount)),
    );

    DaySummary {
        date,
        count: day_trades.len(),
        trades: day_trades,
        total,
        outcome: DayOutcome::from_total(total),
        chip: chip_value(total),
    }
}

/// Absolute value in whole units.
pub fn chip_value(total: Decimal) -> Decimal {
    total
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::WinRateGauge;
    use rust_decimal_macros::dec;

    fn trade(id: &str, date: &str, converted: Decimal) -> Trade {
        Trade {
            id: id.to_string(),
            date: date.parse().unwrap(),
            currency: "SGD".to_string(),
            amount: converted,
            converted_amount: converted,
            note: None,
            conversion_unavailable: false,
        }
    }

    fn amounts(values: &[Decimal]) -> Vec<Trade> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| trade(&i.to_string(), "2026-10-01", *v))
            .collect()
    }

    #[test]
    fn test_empty_collection() {
        let stats = calculate_stats(&[]);
        assert_eq!(stats.total, dec!(0));
        assert_eq!(stats.win_rate, 0);
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            serde_json::json!({
                "total": "0.00",
                "winRate": "0",
                "tradeCount": 0,
                "wins": 0,
                "losses": 0
            })
        );
    }

    #[test]
    fn test_one_win_one_loss() {
        let stats = calculate_stats(&amounts(&[dec!(100), dec!(-50)]));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total"], "50.00");
        assert_eq!(json["winRate"], "50");
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 1);
    }

    #[test]
    fn test_zero_amounts_are_not_wins() {
        let stats = calculate_stats(&amounts(&[dec!(0), dec!(0)]));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total"], "0.00");
        assert_eq!(json["winRate"], "0");
        assert_eq!(stats.trade_count, 2);
        assert_eq!(stats.losses, 0);
    }

    #[test]
    fn test_win_rate_rounds_to_nearest() {
        // 1/3 -> 33, 2/3 -> 67, 1/8 -> 12.5 -> 13
        assert_eq!(calculate_stats(&amounts(&[dec!(1), dec!(-1), dec!(-1)])).win_rate, 33);
        assert_eq!(calculate_stats(&amounts(&[dec!(1), dec!(1), dec!(-1)])).win_rate, 67);
        let mut eighth = vec![dec!(1)];
        eighth.extend(std::iter::repeat(dec!(-1)).take(7));
        assert_eq!(calculate_stats(&amounts(&eighth)).win_rate, 13);
    }

    #[test]
    fn test_exclude_policy_drops_unavailable_trades() {
        let mut trades = amounts(&[dec!(100), dec!(-50), dec!(0)]);
        trades[2].conversion_unavailable = true;

        let counted = calculate_stats_with_policy(&trades, MissingRatePolicy::Zero);
        assert_eq!(counted.trade_count, 3);
        assert_eq!(counted.win_rate, 33);

        let excluded = calculate_stats_with_policy(&trades, MissingRatePolicy::Exclude);
        assert_eq!(excluded.trade_count, 2);
        assert_eq!(excluded.win_rate, 50);
        assert_eq!(excluded.total, dec!(50.00));
    }

    #[test]
    fn test_gauge() {
        let stats = calculate_stats(&amounts(&[dec!(1), dec!(1), dec!(-1)]));
        assert_eq!(
            WinRateGauge::from_stats(&stats),
            WinRateGauge {
                win: 67,
                remainder: 33
            }
        );
    }

    #[test]
    fn test_equity_series_sorts_stably_by_date() {
        let trades = vec![
            trade("a", "2026-10-05", dec!(10)),
            trade("b", "2026-10-01", dec!(-5)),
            trade("c", "2026-10-05", dec!(20)),
            trade("d", "2026-09-30", dec!(1.5)),
        ];

        let series = equity_series(&trades);
        let ids: Vec<&str> = series.iter().map(|p| p.trade_id.as_str()).collect();
        let values: Vec<Decimal> = series.iter().map(|p| p.value).collect();
        assert_eq!(ids, vec!["d", "b", "a", "c"]);
        assert_eq!(values, vec![dec!(1.5), dec!(-3.5), dec!(6.5), dec!(26.5)]);
        assert_eq!(series[3].index, 3);
    }

    #[test]
    fn test_sparkline_trend() {
        assert_eq!(sparkline(&[]).trend, Trend::Up);

        let up = equity_series(&amounts(&[dec!(-5), dec!(5)]));
        assert_eq!(sparkline(&up).trend, Trend::Up);

        let down = equity_series(&amounts(&[dec!(5), dec!(-6)]));
        let spark = sparkline(&down);
        assert_eq!(spark.trend, Trend::Down);
        assert_eq!(spark.values, vec![dec!(5), dec!(-1)]);
    }

    #[test]
    fn test_day_summary() {
        let trades = vec![
            trade("a", "2026-10-05", dec!(10.25)),
            trade("b", "2026-10-06", dec!(99)),
            trade("c", "2026-10-05", dec!(-77.75)),
        ];

        let summary = day_summary(&trades, "2026-10-05".parse().unwrap());
        assert_eq!(summary.count, 2);
        assert_eq!(summary.trades[0].id, "a");
        assert_eq!(summary.trades[1].id, "c");
        assert_eq!(summary.total, dec!(-67.50));
        assert_eq!(summary.outcome, DayOutcome::Loss);
        assert_eq!(summary.chip, dec!(68));
    }

    #[test]
    fn test_empty_day_is_a_flat_win() {
        let summary = day_summary(&[], "2026-10-05".parse().unwrap());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total, dec!(0));
        assert_eq!(summary.outcome, DayOutcome::Win);
        assert_eq!(summary.chip, dec!(0));
    }

    #[test]
    fn test_sums_saturate_instead_of_overflowing() {
        use crate::fx::{convert, RateTable};

        let huge = convert(
            Decimal::from_i128_with_scale(5 * 10_i128.pow(28), 0),
            "USD",
            &RateTable::default_table(),
            "SGD",
        );
        assert!(huge > Decimal::ZERO);

        let trades = vec![
            trade("a", "2026-10-05", huge),
            trade("b", "2026-10-05", huge),
        ];
        let stats = calculate_stats(&trades);
        assert_eq!(stats.total, Decimal::MAX);
        assert_eq!(stats.win_rate, 100);

        let series = equity_series(&trades);
        assert_eq!(series[0].value, huge);
        assert_eq!(series[1].value, Decimal::MAX);

        let summary = day_summary(&trades, "2026-10-05".parse().unwrap());
        assert_eq!(summary.total, Decimal::MAX);
        assert_eq!(summary.outcome, DayOutcome::Win);

        let losses = vec![
            trade("c", "2026-10-06", -huge),
            trade("d", "2026-10-06", -huge),
        ];
        assert_eq!(calculate_stats(&losses).total, Decimal::MIN);
        assert_eq!(sparkline(&equity_series(&losses)).trend, Trend::Down);
    }
}
