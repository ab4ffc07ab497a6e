//! Macro-economic indicator port trait.

use crate::domain::economic::EconomicIndicators;
use crate::domain::error::MarketPulseError;
use chrono::NaiveDate;

pub trait EconomicPort {
    /// Point-in-time snapshot of all indicators.
    fn snapshot(&self) -> Result<EconomicIndicators, MarketPulseError>;

    /// History of one named indicator, one value per entry of `dates`.
    fn history(&self, name: &str, dates: &[NaiveDate]) -> Result<Vec<f64>, MarketPulseError>;
}
