//! Analysis parameters shared by the indicator, signal and statistics engines.

use crate::ports::config_port::ConfigPort;

pub const DEFAULT_SHORT_WINDOW: usize = 20;
pub const DEFAULT_LONG_WINDOW: usize = 50;
pub const DEFAULT_RSI_PERIOD: usize = 14;
pub const DEFAULT_OVERSOLD: f64 = 30.0;
pub const DEFAULT_OVERBOUGHT: f64 = 70.0;
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;
pub const DEFAULT_SENTIMENT_WINDOW: usize = 10;
pub const DEFAULT_NEUTRAL_BAND: f64 = 0.005;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisParams {
    pub short_window: usize,
    pub long_window: usize,
    pub rsi_period: usize,
    /// Buy signals require RSI strictly below this level.
    pub oversold: f64,
    /// Sell signals require RSI strictly above this level.
    pub overbought: f64,
    /// Annual rate, converted to a daily rate over 252 trading days.
    pub risk_free_rate: f64,
    pub sentiment_window: usize,
    /// Fraction of the long average within which sentiment is neutral.
    pub neutral_band: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            short_window: DEFAULT_SHORT_WINDOW,
            long_window: DEFAULT_LONG_WINDOW,
            rsi_period: DEFAULT_RSI_PERIOD,
            oversold: DEFAULT_OVERSOLD,
            overbought: DEFAULT_OVERBOUGHT,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            sentiment_window: DEFAULT_SENTIMENT_WINDOW,
            neutral_band: DEFAULT_NEUTRAL_BAND,
        }
    }
}

impl AnalysisParams {
    /// Read the `[analysis]` section, falling back to defaults per key.
    ///
    /// Does not validate; see
    /// [`validate_analysis_config`](crate::domain::config_validation::validate_analysis_config).
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let d = Self::default();
        Self {
            short_window: config.get_int("analysis", "short_window", d.short_window as i64).max(0)
                as usize,
            long_window: config.get_int("analysis", "long_window", d.long_window as i64).max(0)
                as usize,
            rsi_period: config.get_int("analysis", "rsi_period", d.rsi_period as i64).max(0)
                as usize,
            oversold: config.get_double("analysis", "oversold", d.oversold),
            overbought: config.get_double("analysis", "overbought", d.overbought),
            risk_free_rate: config.get_double("analysis", "risk_free_rate", d.risk_free_rate),
            sentiment_window: config
                .get_int("analysis", "sentiment_window", d.sentiment_window as i64)
                .max(0) as usize,
            neutral_band: config.get_double("analysis", "neutral_band", d.neutral_band),
        }
    }

    /// Number of observations before the first Buy/Sell can appear.
    pub fn warmup(&self) -> usize {
        self.short_window.max(self.long_window).max(self.rsi_period)
    }
}
