//! Plain-text report adapter implementing ReportPort.

use crate::domain::correlation::{correlation_key, VOLUME_VS_VOLATILITY};
use crate::domain::economic::EconomicIndicators;
use crate::domain::report::{MarketReport, ReportOutcome};
use crate::domain::signal::Recommendation;
use crate::domain::statistics::{SentimentReading, StatsSummary};
use crate::ports::report_port::ReportPort;
use std::collections::BTreeMap;

const RULE: &str = "========================================";
pub const DATA_UNAVAILABLE_TEXT: &str = "failed to retrieve data";

#[derive(Debug, Default)]
pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn opt(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{:.2}{}", v, suffix),
        None => "n/a".to_string(),
    }
}

fn render_report(r: &MarketReport) -> String {
    let mut output = String::new();

    output.push_str(&render_header(r));
    output.push_str(&render_statistics(&r.stats));
    output.push_str(&render_sentiment(r.sentiment.as_ref()));
    output.push_str(&render_signal(r.recommendation.as_ref()));
    output.push_str(&render_economic(&r.economic));
    output.push_str(&render_correlations(&r.correlations));
    output.push_str(&format!("{RULE}\n"));

    output
}

fn render_header(r: &MarketReport) -> String {
    let mut output = format!("{RULE}\n");
    output.push_str(&format!("Market analysis report: {}\n", r.symbol));
    output.push_str(&format!("Period: {}\n", r.period));
    output.push_str(&format!(
        "Generated: {}\n",
        r.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    output.push_str(&format!("{RULE}\n\n"));
    output
}

fn render_statistics(s: &StatsSummary) -> String {
    let mut output = format!("1. Key statistics ({} observations):\n", s.observations);
    output.push_str(&format!("   - Current price: ${:.2}\n", s.current_price));
    output.push_str(&format!("   - Change:        {}\n", opt(s.price_change_pct, "%")));
    output.push_str(&format!("   - Average price: ${:.2}\n", s.avg_price));
    output.push_str(&format!("   - High:          ${:.2}\n", s.max_price));
    output.push_str(&format!("   - Low:           ${:.2}\n", s.min_price));
    output.push_str(&format!("   - Avg volume:    {:.0}\n", s.avg_volume));
    output.push_str(&format!("   - Volatility:    {:.2}%\n", s.volatility));
    output.push_str(&format!("   - Sharpe ratio:  {:.2}\n\n", s.sharpe_ratio));
    output
}

fn render_sentiment(reading: Option<&SentimentReading>) -> String {
    let mut output = String::from("2. Market sentiment:\n");
    match reading {
        Some(reading) => output.push_str(&format!("   {}\n\n", reading)),
        None => output.push_str("   insufficient data for sentiment analysis\n\n"),
    }
    output
}

fn render_signal(recommendation: Option<&Recommendation>) -> String {
    let mut output = String::from("3. Signal:\n");
    match recommendation {
        Some(rec) => output.push_str(&format!("   {} (as of {})\n\n", rec, rec.date)),
        None => output.push_str("   insufficient data for a recommendation\n\n"),
    }
    output
}

fn render_economic(e: &EconomicIndicators) -> String {
    let mut output = String::from("4. Global economic indicators:\n");
    output.push_str(&format!("   - US interest rate: {}%\n", e.interest_rate_us));
    output.push_str(&format!("   - EU interest rate: {}%\n", e.interest_rate_eu));
    output.push_str(&format!("   - Inflation rate:   {}%\n", e.inflation_rate));
    output.push_str(&format!("   - Unemployment:     {}%\n", e.unemployment_rate));
    output.push_str(&format!("   - GDP growth:       {}%\n", e.gdp_growth));
    output.push_str(&format!("   - VIX index:        {}\n", e.vix_index));
    output.push_str(&format!("   - Oil price:        ${}\n", e.oil_price));
    output.push_str(&format!("   - Gold price:       ${}\n\n", e.gold_price));
    output
}

fn render_correlations(correlations: &BTreeMap<String, f64>) -> String {
    let mut output = String::from("5. Correlation analysis:\n");
    if correlations.is_empty() {
        output.push_str("   no defined correlations\n");
    }
    let prefix = correlation_key("");
    for (key, value) in correlations {
        let label = if key == VOLUME_VS_VOLATILITY {
            "Volume vs volatility".to_string()
        } else {
            let name = key.strip_prefix(prefix.as_str()).unwrap_or(key);
            format!("Price vs {}", name.replace('_', " "))
        };
        output.push_str(&format!("   - {}: {:.2}\n", label, value));
    }
    output.push('\n');
    output
}

impl ReportPort for TextReportAdapter {
    fn render(&self, outcome: &ReportOutcome) -> String {
        match outcome {
            ReportOutcome::Complete(report) => render_report(report),
            ReportOutcome::DataUnavailable { symbol, reason } => {
                format!("{DATA_UNAVAILABLE_TEXT} for {symbol}: {reason}\n")
            }
        }
    }
}
