//! Market data access port trait.

use crate::domain::error::MarketPulseError;
use crate::domain::period::Period;
use crate::domain::time_series::TimeSeries;

pub trait DataPort {
    /// Fetch the daily series for `symbol` covering `period`.
    ///
    /// Provider or network failures surface as
    /// [`MarketPulseError::DataUnavailable`]. An empty series is a valid answer.
    fn fetch(&self, symbol: &str, period: Period) -> Result<TimeSeries, MarketPulseError>;
}
