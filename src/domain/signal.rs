//! Crossover signal generation and latest-date recommendation.
//!
//! Per date t (t >= 1):
//! - Buy:  short MA crosses above long MA between t-1 and t, and RSI[t] < oversold
//! - Sell: short MA crosses below long MA between t-1 and t, and RSI[t] > overbought
//! - Hold: otherwise, including when any MA or RSI value at t or t-1 is undefined

use crate::domain::error::MarketPulseError;
use crate::domain::indicator::{compute_indicators, IndicatorSet};
use crate::domain::strategy::AnalysisParams;
use crate::domain::time_series::TimeSeries;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Human action word: buy, sell, or wait.
    pub fn action(self) -> &'static str {
        match self {
            Signal::Buy => "buy",
            Signal::Sell => "sell",
            Signal::Hold => "wait",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Buy => write!(f, "BUY"),
            Signal::Sell => write!(f, "SELL"),
            Signal::Hold => write!(f, "HOLD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalPoint {
    pub date: NaiveDate,
    pub signal: Signal,
}

pub fn generate_signals(indicators: &IndicatorSet, params: &AnalysisParams) -> Vec<SignalPoint> {
    (0..indicators.len())
        .filter_map(|t| {
            indicators.date(t).map(|date| SignalPoint {
                date,
                signal: signal_at(indicators, t, params),
            })
        })
        .collect()
}

fn signal_at(indicators: &IndicatorSet, t: usize, params: &AnalysisParams) -> Signal {
    if t == 0 {
        return Signal::Hold;
    }

    let (Some(short), Some(long), Some(prev_short), Some(prev_long), Some(rsi), Some(_)) = (
        indicators.ma_short.get(t),
        indicators.ma_long.get(t),
        indicators.ma_short.get(t - 1),
        indicators.ma_long.get(t - 1),
        indicators.rsi.get(t),
        indicators.rsi.get(t - 1),
    ) else {
        return Signal::Hold;
    };

    let crossed_up = short > long && prev_short <= prev_long;
    let crossed_down = short < long && prev_short >= prev_long;

    if crossed_up && rsi < params.oversold {
        Signal::Buy
    } else if crossed_down && rsi > params.overbought {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

/// Signal, close, and RSI at the latest date of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub date: NaiveDate,
    pub signal: Signal,
    pub price: f64,
    pub rsi: Option<f64>,
}

impl Recommendation {
    pub fn action(&self) -> &'static str {
        self.signal.action()
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recommendation: {} | price: {:.2} | RSI: ", self.action(), self.price)?;
        match self.rsi {
            Some(rsi) => write!(f, "{:.2}", rsi),
            None => write!(f, "n/a"),
        }
    }
}

/// Full pipeline output for one series: derived indicators plus one signal per date.
#[derive(Debug, Clone)]
pub struct SignalRun {
    pub indicators: IndicatorSet,
    pub signals: Vec<SignalPoint>,
}

pub fn run_signals(series: &TimeSeries, params: &AnalysisParams) -> SignalRun {
    let indicators = compute_indicators(series, params);
    let signals = generate_signals(&indicators, params);
    SignalRun {
        indicators,
        signals,
    }
}

pub fn get_recommendation(
    series: &TimeSeries,
    params: &AnalysisParams,
) -> Result<Recommendation, MarketPulseError> {
    let last = series.last().ok_or(MarketPulseError::EmptyInput)?;
    let run = run_signals(series, params);
    let idx = series.len() - 1;

    Ok(Recommendation {
        date: last.date,
        signal: run.signals.get(idx).map(|p| p.signal).unwrap_or(Signal::Hold),
        price: last.close,
        rsi: run.indicators.rsi.get(idx),
    })
}
