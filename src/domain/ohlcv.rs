//! OHLCV bar representation.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct OhlcvBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl OhlcvBar {
    /// Check price consistency: finite prices, high >= low, and the
    /// high/low range enclosing both open and close.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() {
                return Err(format!("{}: {} is not finite", self.date, name));
            }
        }
        if self.high < self.low {
            return Err(format!(
                "{}: high {} below low {}",
                self.date, self.high, self.low
            ));
        }
        if self.high < self.open.max(self.close) {
            return Err(format!(
                "{}: high {} below open/close",
                self.date, self.high
            ));
        }
        if self.low > self.open.min(self.close) {
            return Err(format!("{}: low {} above open/close", self.date, self.low));
        }
        Ok(())
    }

    /// (close - prev_close) / prev_close, or `None` when `prev_close` is zero.
    pub fn return_from(&self, prev_close: f64) -> Option<f64> {
        if prev_close == 0.0 {
            None
        } else {
            Some((self.close - prev_close) / prev_close)
        }
    }
}
