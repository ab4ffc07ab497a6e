//! Report assembly: runs every engine over one symbol's series.

use crate::domain::correlation::correlate;
use crate::domain::economic::EconomicIndicators;
use crate::domain::error::MarketPulseError;
use crate::domain::period::Period;
use crate::domain::signal::{get_recommendation, Recommendation};
use crate::domain::statistics::{classify_sentiment, compute_statistics, SentimentReading, StatsSummary};
use crate::domain::strategy::AnalysisParams;
use crate::ports::data_port::DataPort;
use crate::ports::economic_port::EconomicPort;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Everything a renderer needs for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketReport {
    pub symbol: String,
    pub period: Period,
    pub generated_at: NaiveDateTime,
    pub stats: StatsSummary,
    pub sentiment: Option<SentimentReading>,
    pub recommendation: Option<Recommendation>,
    pub economic: EconomicIndicators,
    pub correlations: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Complete(MarketReport),
    /// The fetch failed or returned no observations; no partial statistics.
    DataUnavailable { symbol: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub symbol: String,
    pub period: Period,
    /// Economic indicator names whose history is correlated with closes.
    pub auxiliary: Vec<String>,
    pub generated_at: NaiveDateTime,
}

/// Fetch the series and assemble the report.
///
/// Data source failures become [`ReportOutcome::DataUnavailable`]; only an
/// economic snapshot failure is returned as an error. Auxiliary histories that
/// cannot be loaded are skipped.
pub fn build_report(
    data_port: &dyn DataPort,
    economic_port: &dyn EconomicPort,
    request: &ReportRequest,
    params: &AnalysisParams,
) -> Result<ReportOutcome, MarketPulseError> {
    let symbol = request.symbol.clone();

    let series = match data_port.fetch(&symbol, request.period) {
        Ok(s) if s.is_empty() => {
            warn!(symbol = %symbol, "data source returned no observations");
            return Ok(ReportOutcome::DataUnavailable {
                symbol,
                reason: "no observations".to_string(),
            });
        }
        Ok(s) => s,
        Err(e) => {
            warn!(symbol = %symbol, error = %e, "failed to fetch market data");
            return Ok(ReportOutcome::DataUnavailable {
                symbol,
                reason: e.to_string(),
            });
        }
    };
    info!(symbol = %symbol, bars = series.len(), "fetched market data");

    let economic = economic_port.snapshot()?;

    let dates = series.dates();
    let mut auxiliary = BTreeMap::new();
    for name in &request.auxiliary {
        match economic_port.history(name, &dates) {
            Ok(values) => {
                auxiliary.insert(name.clone(), values);
            }
            Err(e) => warn!(name = %name, error = %e, "skipping auxiliary series"),
        }
    }

    let stats = compute_statistics(&series, params.risk_free_rate);
    let sentiment = classify_sentiment(&series, params).ok();
    let recommendation = get_recommendation(&series, params).ok();
    let correlations = correlate(&series, &auxiliary);
    debug!(
        symbol = %symbol,
        correlations = correlations.len(),
        "report assembled"
    );

    Ok(ReportOutcome::Complete(MarketReport {
        symbol,
        period: request.period,
        generated_at: request.generated_at,
        stats,
        sentiment,
        recommendation,
        economic,
        correlations,
    }))
}
