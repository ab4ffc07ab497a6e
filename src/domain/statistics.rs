//! Summary statistics, Sharpe ratio, and sentiment classification.

use crate::domain::error::MarketPulseError;
use crate::domain::numeric::{daily_returns, mean, sample_stddev};
use crate::domain::strategy::AnalysisParams;
use crate::domain::time_series::TimeSeries;
use std::fmt;

const TRADING_DAYS_PER_YEAR: f64 = 252.0;
const STRONG_BULLISH_RATIO: f64 = 1.02;
const STRONG_BEARISH_RATIO: f64 = 0.98;

#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub observations: usize,
    pub current_price: f64,
    pub avg_price: f64,
    pub max_price: f64,
    pub min_price: f64,
    /// `None` when the first close is zero.
    pub price_change_pct: Option<f64>,
    pub avg_volume: f64,
    /// Sample standard deviation of daily returns, in percent.
    pub volatility: f64,
    pub sharpe_ratio: f64,
}

impl StatsSummary {
    pub fn empty() -> Self {
        Self {
            observations: 0,
            current_price: 0.0,
            avg_price: 0.0,
            max_price: 0.0,
            min_price: 0.0,
            price_change_pct: Some(0.0),
            avg_volume: 0.0,
            volatility: 0.0,
            sharpe_ratio: 0.0,
        }
    }

    pub fn compute(series: &TimeSeries, risk_free_rate: f64) -> Self {
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return Self::empty();
        };

        let closes = series.closes();
        let avg_price = mean(&closes).unwrap_or(0.0);
        let max_price = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_price = closes.iter().copied().fold(f64::INFINITY, f64::min);

        let price_change_pct = if first.close != 0.0 {
            Some((last.close - first.close) / first.close * 100.0)
        } else {
            None
        };

        StatsSummary {
            observations: series.len(),
            current_price: last.close,
            avg_price,
            max_price,
            min_price,
            price_change_pct,
            avg_volume: mean(&series.volumes()).unwrap_or(0.0),
            volatility: volatility_pct(&closes),
            sharpe_ratio: sharpe_ratio(&closes, risk_free_rate),
        }
    }
}

pub fn compute_statistics(series: &TimeSeries, risk_free_rate: f64) -> StatsSummary {
    StatsSummary::compute(series, risk_free_rate)
}

/// Standard deviation of daily returns × 100; 0.0 with fewer than two returns.
pub fn volatility_pct(closes: &[f64]) -> f64 {
    sample_stddev(&daily_returns(closes))
        .map(|sd| sd * 100.0)
        .unwrap_or(0.0)
}

/// sqrt(252) × mean(return - rf/252) / stddev(return).
///
/// Returns 0.0 when the return deviation is zero or undefined.
pub fn sharpe_ratio(closes: &[f64], risk_free_rate: f64) -> f64 {
    let returns = daily_returns(closes);
    let stddev = match sample_stddev(&returns) {
        Some(sd) if sd > 0.0 && sd.is_finite() => sd,
        _ => return 0.0,
    };

    let daily_rf = risk_free_rate / TRADING_DAYS_PER_YEAR;
    let excess: Vec<f64> = returns.iter().map(|r| r - daily_rf).collect();
    let mean_excess = mean(&excess).unwrap_or(0.0);

    TRADING_DAYS_PER_YEAR.sqrt() * (mean_excess / stddev)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    StronglyBullish,
    ModeratelyBullish,
    Neutral,
    ModeratelyBearish,
    StronglyBearish,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::StronglyBullish => "strongly bullish",
            Sentiment::ModeratelyBullish => "moderately bullish",
            Sentiment::Neutral => "neutral",
            Sentiment::ModeratelyBearish => "moderately bearish",
            Sentiment::StronglyBearish => "strongly bearish",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentReading {
    pub sentiment: Sentiment,
    pub recent_avg: f64,
    pub long_avg: f64,
    pub volatility: f64,
}

impl fmt::Display for SentimentReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "market sentiment: {} | volatility: {:.2}%",
            self.sentiment, self.volatility
        )
    }
}

/// Strong thresholds are checked first, then the neutral band, then the
/// direction of the recent average relative to the long one.
pub fn classify(recent_avg: f64, long_avg: f64, neutral_band: f64) -> Sentiment {
    if recent_avg > long_avg * STRONG_BULLISH_RATIO {
        Sentiment::StronglyBullish
    } else if recent_avg < long_avg * STRONG_BEARISH_RATIO {
        Sentiment::StronglyBearish
    } else if (recent_avg - long_avg).abs() <= neutral_band * long_avg.abs() {
        Sentiment::Neutral
    } else if recent_avg > long_avg {
        Sentiment::ModeratelyBullish
    } else {
        Sentiment::ModeratelyBearish
    }
}

pub fn classify_sentiment(
    series: &TimeSeries,
    params: &AnalysisParams,
) -> Result<SentimentReading, MarketPulseError> {
    if series.is_empty() {
        return Err(MarketPulseError::EmptyInput);
    }

    let closes = series.closes();
    let window = params.sentiment_window.clamp(1, closes.len());
    let recent_avg = mean(&closes[closes.len() - window..]).unwrap_or(0.0);
    let long_avg = mean(&closes).unwrap_or(0.0);

    Ok(SentimentReading {
        sentiment: classify(recent_avg, long_avg, params.neutral_band),
        recent_avg,
        long_avg,
        volatility: volatility_pct(&closes),
    })
}
