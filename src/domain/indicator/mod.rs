//! Technical indicator implementations.
//!
//! This module provides types for representing indicator values and series:
//! - `IndicatorPoint`: A single point in an indicator time series
//! - `IndicatorType`: Indicator identity + parameters
//! - `IndicatorSeries`: A time series of indicator values
//! - `IndicatorSet`: The moving averages and RSI derived from one price series

pub mod rsi;
pub mod sma;

use crate::domain::strategy::AnalysisParams;
use crate::domain::time_series::TimeSeries;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub valid: bool,
    pub value: f64,
}

impl IndicatorPoint {
    pub fn invalid(date: NaiveDate) -> Self {
        Self {
            date,
            valid: false,
            value: 0.0,
        }
    }

    pub fn valid(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            valid: true,
            value,
        }
    }

    /// The value, or `None` inside the warm-up region.
    pub fn get(&self) -> Option<f64> {
        self.valid.then_some(self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorType {
    Sma(usize),
    Rsi(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub indicator_type: IndicatorType,
    pub values: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).and_then(IndicatorPoint::get)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Sma(period) => write!(f, "SMA({})", period),
            IndicatorType::Rsi(period) => write!(f, "RSI({})", period),
        }
    }
}

/// Indicator columns derived from a price series, aligned index-for-index
/// with its bars.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    pub ma_short: IndicatorSeries,
    pub ma_long: IndicatorSeries,
    pub rsi: IndicatorSeries,
}

impl IndicatorSet {
    pub fn len(&self) -> usize {
        self.ma_short.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ma_short.is_empty()
    }

    pub fn date(&self, index: usize) -> Option<NaiveDate> {
        self.ma_short.values.get(index).map(|p| p.date)
    }
}

pub fn compute_indicators(series: &TimeSeries, params: &AnalysisParams) -> IndicatorSet {
    let bars = series.bars();
    IndicatorSet {
        ma_short: sma::calculate_sma(bars, params.short_window),
        ma_long: sma::calculate_sma(bars, params.long_window),
        rsi: rsi::calculate_rsi(bars, params.rsi_period),
    }
}
