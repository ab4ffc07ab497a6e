//! Validated, immutable daily price series.

use crate::domain::error::MarketPulseError;
use crate::domain::ohlcv::OhlcvBar;
use chrono::NaiveDate;

/// Ordered OHLCV observations for one symbol.
///
/// Dates are strictly increasing and every bar passes [`OhlcvBar::validate`].
/// The bars are private so a constructed series cannot be edited; derived
/// columns live in separate structures such as
/// [`IndicatorSet`](crate::domain::indicator::IndicatorSet).
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    symbol: String,
    bars: Vec<OhlcvBar>,
}

impl TimeSeries {
    pub fn new(symbol: impl Into<String>, bars: Vec<OhlcvBar>) -> Result<Self, MarketPulseError> {
        let symbol = symbol.into();

        for bar in &bars {
            bar.validate()
                .map_err(|reason| MarketPulseError::InvalidSeries {
                    symbol: symbol.clone(),
                    reason,
                })?;
        }

        if let Some(w) = bars.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(MarketPulseError::InvalidSeries {
                symbol,
                reason: format!(
                    "dates not strictly increasing: {} followed by {}",
                    w[0].date, w[1].date
                ),
            });
        }

        Ok(Self { symbol, bars })
    }

    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[OhlcvBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first(&self) -> Option<&OhlcvBar> {
        self.bars.first()
    }

    pub fn last(&self) -> Option<&OhlcvBar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume as f64).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }
}
