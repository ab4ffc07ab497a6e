//! RSI (Relative Strength Index) indicator implementation.
//!
//! Uses simple rolling averages for gain/loss (not Wilder's smoothing):
//! - delta[i] = C[i] - C[i-1] for i >= 1
//! - avg_gain[i] = mean(max(delta, 0)) over the last n deltas
//! - avg_loss[i] = mean(max(-delta, 0)) over the last n deltas
//!
//! Formula: RSI = 100 - (100 / (1 + avg_gain / avg_loss))
//! If avg_loss == 0: RSI = 100
//!
//! Warmup: first n bars are invalid (need n price changes).

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType};
use crate::domain::ohlcv::OhlcvBar;

pub fn calculate_rsi(bars: &[OhlcvBar], period: usize) -> IndicatorSeries {
    if period == 0 || bars.len() <= period {
        let values: Vec<IndicatorPoint> =
            bars.iter().map(|b| IndicatorPoint::invalid(b.date)).collect();

        return IndicatorSeries {
            indicator_type: IndicatorType::Rsi(period),
            values,
        };
    }

    let mut gains: Vec<f64> = Vec::with_capacity(bars.len() - 1);
    let mut losses: Vec<f64> = Vec::with_capacity(bars.len() - 1);

    for w in bars.windows(2) {
        let change = w[1].close - w[0].close;
        gains.push(if change > 0.0 { change } else { 0.0 });
        losses.push(if change < 0.0 { -change } else { 0.0 });
    }

    let mut values = Vec::with_capacity(bars.len());
    values.push(IndicatorPoint::invalid(bars[0].date));

    for (i, bar) in bars.iter().enumerate().skip(1) {
        // gains[i - 1] is the change into bar i
        if i < period {
            values.push(IndicatorPoint::invalid(bar.date));
            continue;
        }
        let window = i - period..i;
        let avg_gain = gains[window.clone()].iter().sum::<f64>() / period as f64;
        let avg_loss = losses[window].iter().sum::<f64>() / period as f64;
        values.push(IndicatorPoint::valid(bar.date, rsi_from_averages(avg_gain, avg_loss)));
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Rsi(period),
        values,
    }
}

pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        let rsi = 100.0 - (100.0 / (1.0 + avg_gain / avg_loss));
        rsi.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn make_bar(date: &str, close: f64) -> OhlcvBar {
        OhlcvBar {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1000,
        }
    }

    fn make_bars(prices: &[f64]) -> Vec<OhlcvBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &close)| OhlcvBar {
                date: start + chrono::Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000,
            })
            .collect()
    }

    #[test]
    fn rsi_empty_bars() {
        let bars: Vec<OhlcvBar> = vec![];
        let series = calculate_rsi(&bars, 14);
        assert_eq!(series.values.len(), 0);
    }

    #[test]
    fn rsi_single_bar() {
        let bars = vec![make_bar("2024-01-01", 100.0)];
        let series = calculate_rsi(&bars, 14);
        assert_eq!(series.values.len(), 1);
        assert!(!series.values[0].valid);
    }

    #[test]
    fn rsi_warmup_period() {
        let bars: Vec<OhlcvBar> = (1..=15)
            .map(|i| {
                let date = format!("2024-01-{:02}", i);
                make_bar(&date, 100.0 + (i as f64 % 5.0) * 2.0)
            })
            .collect();

        let series = calculate_rsi(&bars, 14);

        assert_eq!(series.values.len(), 15);

        for i in 0..14 {
            assert!(!series.values[i].valid, "Bar {} should be invalid", i);
        }
        assert!(series.values[14].valid, "Bar 14 should be valid");
    }

    #[test]
    fn rsi_period_not_shorter_than_series() {
        let bars = make_bars(&[1.0, 2.0, 3.0]);
        let series = calculate_rsi(&bars, 3);
        assert_eq!(series.values.len(), 3);
        assert!(series.values.iter().all(|p| !p.valid));
    }

    #[test]
    fn rsi_all_gains_no_losses() {
        let prices: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        let series = calculate_rsi(&make_bars(&prices), 14);
        assert_eq!(series.values[14].get(), Some(100.0));
    }

    #[test]
    fn rsi_all_losses_no_gains() {
        let prices: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        let series = calculate_rsi(&make_bars(&prices), 14);
        let rsi = series.values[14].get().unwrap();
        assert!(rsi.abs() < f64::EPSILON, "RSI should be 0 when all losses");
    }

    #[test]
    fn rsi_flat_prices_is_100() {
        let series = calculate_rsi(&make_bars(&[50.0; 6]), 3);
        for point in &series.values[3..] {
            assert_eq!(point.get(), Some(100.0));
        }
    }

    #[test]
    fn rsi_simple_average_known_values() {
        // deltas: +2, -1, +3, -2
        let bars = make_bars(&[10.0, 12.0, 11.0, 14.0, 12.0]);
        let series = calculate_rsi(&bars, 2);

        assert!(!series.values[0].valid);
        assert!(!series.values[1].valid);

        // i=2: gains [2, 0] -> 1.0, losses [0, 1] -> 0.5, RS 2 -> 66.67
        let expected = 100.0 - 100.0 / 3.0;
        assert!((series.values[2].value - expected).abs() < 1e-9);

        // i=3: gains [0, 3] -> 1.5, losses [1, 0] -> 0.5, RS 3 -> 75
        assert!((series.values[3].value - 75.0).abs() < 1e-9);

        // i=4: gains [3, 0] -> 1.5, losses [0, 2] -> 1.0, RS 1.5 -> 60
        assert!((series.values[4].value - 60.0).abs() < 1e-9);
    }

    #[test]
    fn rsi_window_forgets_old_losses() {
        // One loss followed by gains: once the loss leaves the window RSI is 100.
        let bars = make_bars(&[10.0, 9.0, 10.0, 11.0, 12.0]);
        let series = calculate_rsi(&bars, 2);
        assert!(series.values[2].value < 100.0);
        assert_eq!(series.values[3].get(), Some(100.0));
        assert_eq!(series.values[4].get(), Some(100.0));
    }

    #[test]
    fn rsi_indicator_type() {
        let bars = vec![make_bar("2024-01-01", 100.0)];
        let series = calculate_rsi(&bars, 14);
        assert_eq!(series.indicator_type, IndicatorType::Rsi(14));
    }

    #[test]
    fn rsi_zero_period() {
        let bars = vec![make_bar("2024-01-01", 100.0), make_bar("2024-01-02", 101.0)];
        let series = calculate_rsi(&bars, 0);
        assert_eq!(series.values.len(), 2);
        for point in &series.values {
            assert!(!point.valid);
        }
    }

    #[test]
    fn rsi_from_averages_guards_zero_loss() {
        assert_eq!(rsi_from_averages(0.0, 0.0), 100.0);
        assert_eq!(rsi_from_averages(2.5, 0.0), 100.0);
        assert_eq!(rsi_from_averages(0.0, 1.0), 0.0);
        assert!((rsi_from_averages(1.0, 1.0) - 50.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn rsi_always_in_range(
            prices in prop::collection::vec(0.01f64..10_000.0, 0..80),
            period in 1usize..30,
        ) {
            let series = calculate_rsi(&make_bars(&prices), period);
            prop_assert_eq!(series.values.len(), prices.len());
            for (i, point) in series.values.iter().enumerate() {
                prop_assert_eq!(point.valid, i >= period);
                if let Some(rsi) = point.get() {
                    prop_assert!(rsi.is_finite());
                    prop_assert!((0.0..=100.0).contains(&rsi), "RSI {} out of range", rsi);
                }
            }
        }
    }
}
