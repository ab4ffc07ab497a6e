//! Simple Moving Average.
//!
//! SMA(n)[i] = mean(C[i-n+1..=i])
//! Warmup: first (n-1) bars are invalid. n == 0 or n > len gives an
//! all-invalid series of full length.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType};
use crate::domain::ohlcv::OhlcvBar;

pub fn calculate_sma(bars: &[OhlcvBar], period: usize) -> IndicatorSeries {
    let mut values = Vec::with_capacity(bars.len());

    if period == 0 || period > bars.len() {
        values.extend(bars.iter().map(|b| IndicatorPoint::invalid(b.date)));
        return IndicatorSeries {
            indicator_type: IndicatorType::Sma(period),
            values,
        };
    }

    // Summed per window so each value is the exact mean of its closes.
    for (i, bar) in bars.iter().enumerate() {
        if i + 1 < period {
            values.push(IndicatorPoint::invalid(bar.date));
            continue;
        }
        let window = &bars[i + 1 - period..=i];
        let mean = window.iter().map(|b| b.close).sum::<f64>() / period as f64;
        values.push(IndicatorPoint::valid(bar.date, mean));
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Sma(period),
        values,
    }
}
