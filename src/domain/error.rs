//! Domain error types.

/// Top-level error type for marketpulse.
///
/// Numeric edge cases (insufficient history, zero variance, zero average loss)
/// are never reported here: they are guarded locally and produce invalid
/// indicator points or sentinel values instead.
#[derive(Debug, thiserror::Error)]
pub enum MarketPulseError {
    #[error("empty input: series has no observations")]
    EmptyInput,

    #[error("invalid series for {symbol}: {reason}")]
    InvalidSeries { symbol: String, reason: String },

    #[error("data unavailable for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid period '{0}' (expected one of 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max)")]
    InvalidPeriod(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&MarketPulseError> for std::process::ExitCode {
    fn from(err: &MarketPulseError) -> Self {
        let code: u8 = match err {
            MarketPulseError::Io(_) => 1,
            MarketPulseError::ConfigParse { .. }
            | MarketPulseError::ConfigInvalid { .. }
            | MarketPulseError::InvalidPeriod(_) => 2,
            MarketPulseError::DataUnavailable { .. } => 3,
            MarketPulseError::EmptyInput | MarketPulseError::InvalidSeries { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
