//! CSV file data adapter.
//!
//! One file per symbol, `<base_path>/<SYMBOL>.csv`, with header
//! `date,open,high,low,close,volume` and dates formatted `YYYY-MM-DD`.

use crate::domain::error::MarketPulseError;
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::period::Period;
use crate::domain::time_series::TimeSeries;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol.to_uppercase()))
    }
}

fn parse_field<T>(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
    symbol: &str,
) -> Result<T, MarketPulseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let unavailable = |reason: String| MarketPulseError::DataUnavailable {
        symbol: symbol.to_string(),
        reason,
    };
    record
        .get(index)
        .ok_or_else(|| unavailable(format!("missing {} column", name)))?
        .trim()
        .parse()
        .map_err(|e| unavailable(format!("invalid {} value: {}", name, e)))
}

impl DataPort for CsvAdapter {
    fn fetch(&self, symbol: &str, period: Period) -> Result<TimeSeries, MarketPulseError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| MarketPulseError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| MarketPulseError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str: String = parse_field(&record, 0, "date", symbol)?;
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                MarketPulseError::DataUnavailable {
                    symbol: symbol.to_string(),
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            bars.push(OhlcvBar {
                date,
                open: parse_field(&record, 1, "open", symbol)?,
                high: parse_field(&record, 2, "high", symbol)?,
                low: parse_field(&record, 3, "low", symbol)?,
                close: parse_field(&record, 4, "close", symbol)?,
                volume: parse_field(&record, 5, "volume", symbol)?,
            });
        }

        bars.sort_by_key(|b| b.date);

        // The period is measured back from the latest bar in the file.
        if let Some(start) = bars.last().and_then(|b| period.start_date(b.date)) {
            bars.retain(|b| b.date >= start);
        }

        debug!(symbol, period = %period, bars = bars.len(), path = %path.display(), "loaded CSV");
        TimeSeries::new(symbol.to_uppercase(), bars)
    }
}
