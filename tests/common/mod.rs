#![allow(dead_code)]

use chrono::NaiveDate;
use marketpulse::domain::error::MarketPulseError;
pub use marketpulse::domain::ohlcv::OhlcvBar;
use marketpulse::domain::period::Period;
use marketpulse::domain::time_series::TimeSeries;
use marketpulse::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<OhlcvBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, symbol: &str, bars: Vec<OhlcvBar>) -> Self {
        self.data.insert(symbol.to_string(), bars);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch(&self, symbol: &str, _period: Period) -> Result<TimeSeries, MarketPulseError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(MarketPulseError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: reason.clone(),
            });
        }
        TimeSeries::new(symbol, self.data.get(symbol).cloned().unwrap_or_default())
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Day `i` counted from 2024-01-01.
pub fn day(i: usize) -> NaiveDate {
    date("2024-01-01") + chrono::Duration::days(i as i64)
}

pub fn make_bar(date_str: &str, close: f64) -> OhlcvBar {
    OhlcvBar {
        date: date(date_str),
        open: close,
        high: close,
        low: close,
        close,
        volume: 1000,
    }
}

/// One flat bar per close on consecutive days.
pub fn make_bars(closes: &[f64]) -> Vec<OhlcvBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| OhlcvBar {
            date: day(i),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1000,
        })
        .collect()
}

pub fn make_series(symbol: &str, closes: &[f64]) -> TimeSeries {
    TimeSeries::new(symbol, make_bars(closes)).unwrap()
}
