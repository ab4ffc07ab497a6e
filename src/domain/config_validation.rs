//! Configuration validation.
//!
//! Validates the `[analysis]`, `[data]` and `[economic]` sections before any
//! data is fetched.

use crate::domain::economic::INDICATOR_NAMES;
use crate::domain::error::MarketPulseError;
use crate::domain::period::Period;
use crate::domain::strategy::AnalysisParams;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

pub const DATA_SOURCES: [&str; 2] = ["synthetic", "csv"];

const ANALYSIS_INT_KEYS: [&str; 4] = ["short_window", "long_window", "rsi_period", "sentiment_window"];
const ANALYSIS_FLOAT_KEYS: [&str; 4] = ["oversold", "overbought", "risk_free_rate", "neutral_band"];

pub fn validate_analysis_config(config: &dyn ConfigPort) -> Result<(), MarketPulseError> {
    let defaults = AnalysisParams::default();
    for key in ANALYSIS_INT_KEYS {
        validate_int(config, "analysis", key)?;
    }
    for key in ANALYSIS_FLOAT_KEYS {
        validate_float(config, "analysis", key)?;
    }
    validate_windows(config, &defaults)?;
    validate_thresholds(config, &defaults)?;
    validate_risk_free_rate(config, &defaults)?;
    validate_neutral_band(config, &defaults)?;
    Ok(())
}

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), MarketPulseError> {
    validate_int(config, "data", "seed")?;
    validate_source(config)?;
    validate_period(config)?;
    validate_end_date(config)?;
    Ok(())
}

/// Economic snapshot values must be finite numbers; `history_seed` an integer.
pub fn validate_economic_config(config: &dyn ConfigPort) -> Result<(), MarketPulseError> {
    for key in INDICATOR_NAMES {
        validate_float(config, "economic", key)?;
    }
    validate_int(config, "economic", "history_seed")
}

/// A present value must parse; the typed getters would otherwise fall back
/// to the default silently.
fn validate_int(config: &dyn ConfigPort, section: &str, key: &str) -> Result<(), MarketPulseError> {
    match config.get_string(section, key) {
        Some(raw) if raw.parse::<i64>().is_err() => Err(invalid(
            section,
            key,
            &format!("'{}' is not an integer", raw),
        )),
        _ => Ok(()),
    }
}

fn validate_float(config: &dyn ConfigPort, section: &str, key: &str) -> Result<(), MarketPulseError> {
    match config.get_string(section, key) {
        Some(raw) if !raw.parse::<f64>().is_ok_and(f64::is_finite) => Err(invalid(
            section,
            key,
            &format!("'{}' is not a finite number", raw),
        )),
        _ => Ok(()),
    }
}

fn invalid(section: &str, key: &str, reason: &str) -> MarketPulseError {
    MarketPulseError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_windows(config: &dyn ConfigPort, d: &AnalysisParams) -> Result<(), MarketPulseError> {
    for (key, default) in [
        ("short_window", d.short_window),
        ("long_window", d.long_window),
        ("rsi_period", d.rsi_period),
        ("sentiment_window", d.sentiment_window),
    ] {
        if config.get_int("analysis", key, default as i64) < 1 {
            return Err(invalid(
                "analysis",
                key,
                &format!("{} must be at least 1", key),
            ));
        }
    }

    let short = config.get_int("analysis", "short_window", d.short_window as i64);
    let long = config.get_int("analysis", "long_window", d.long_window as i64);
    if short >= long {
        return Err(invalid(
            "analysis",
            "short_window",
            "short_window must be less than long_window",
        ));
    }
    Ok(())
}

fn validate_thresholds(config: &dyn ConfigPort, d: &AnalysisParams) -> Result<(), MarketPulseError> {
    let oversold = config.get_double("analysis", "oversold", d.oversold);
    let overbought = config.get_double("analysis", "overbought", d.overbought);

    if !(0.0..=100.0).contains(&oversold) {
        return Err(invalid(
            "analysis",
            "oversold",
            "oversold must be between 0 and 100",
        ));
    }
    if !(0.0..=100.0).contains(&overbought) {
        return Err(invalid(
            "analysis",
            "overbought",
            "overbought must be between 0 and 100",
        ));
    }
    if oversold >= overbought {
        return Err(invalid(
            "analysis",
            "oversold",
            "oversold must be below overbought",
        ));
    }
    Ok(())
}

fn validate_risk_free_rate(config: &dyn ConfigPort, d: &AnalysisParams) -> Result<(), MarketPulseError> {
    let value = config.get_double("analysis", "risk_free_rate", d.risk_free_rate);
    if !(0.0..1.0).contains(&value) {
        return Err(invalid(
            "analysis",
            "risk_free_rate",
            "risk_free_rate must be between 0 and 1",
        ));
    }
    Ok(())
}

fn validate_neutral_band(config: &dyn ConfigPort, d: &AnalysisParams) -> Result<(), MarketPulseError> {
    let value = config.get_double("analysis", "neutral_band", d.neutral_band);
    // must stay inside the strong thresholds (±2%)
    if !(0.0..0.02).contains(&value) {
        return Err(invalid(
            "analysis",
            "neutral_band",
            "neutral_band must be at least 0 and below 0.02",
        ));
    }
    Ok(())
}

fn validate_source(config: &dyn ConfigPort) -> Result<(), MarketPulseError> {
    let source = config
        .get_string("data", "source")
        .unwrap_or_else(|| "synthetic".to_string());
    if !DATA_SOURCES.contains(&source.trim().to_lowercase().as_str()) {
        return Err(invalid(
            "data",
            "source",
            &format!("unknown source '{}', expected synthetic or csv", source),
        ));
    }
    Ok(())
}

fn validate_period(config: &dyn ConfigPort) -> Result<(), MarketPulseError> {
    if let Some(p) = config.get_string("data", "period") {
        p.parse::<Period>()
            .map_err(|e| invalid("data", "period", &e.to_string()))?;
    }
    Ok(())
}

fn validate_end_date(config: &dyn ConfigPort) -> Result<(), MarketPulseError> {
    if let Some(s) = config.get_string("data", "end_date") {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            invalid(
                "data",
                "end_date",
                "invalid end_date format, expected YYYY-MM-DD",
            )
        })?;
    }
    Ok(())
}
