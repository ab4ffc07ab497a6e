//! CLI definition and dispatch.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::static_economic_adapter::StaticEconomicAdapter;
use crate::adapters::synthetic_adapter::SyntheticAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::config_validation::{
    validate_analysis_config, validate_data_config, validate_economic_config,
};
use crate::domain::error::MarketPulseError;
use crate::domain::period::Period;
use crate::domain::report::{build_report, ReportOutcome, ReportRequest};
use crate::domain::signal::{get_recommendation, run_signals, Signal};
use crate::domain::strategy::AnalysisParams;
use crate::logging::init_logging;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::economic_port::EconomicPort;
use crate::ports::report_port::ReportPort;

pub const DEFAULT_SEED: i64 = 42;
pub const DEFAULT_CSV_DIR: &str = "data";
pub const DEFAULT_AUXILIARY: [&str; 2] = ["interest_rate_us", "inflation_rate"];
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "marketpulse", about = "Market data analysis and signal reports")]
pub struct Cli {
    /// Overrides `[logging] level`; `RUST_LOG` still wins
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the full analysis report for a symbol
    Report {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long)]
        period: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the latest recommendation and recent signal rows
    Signals {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long)]
        period: Option<String>,
        #[arg(long, default_value_t = 5)]
        tail: usize,
    },
    /// List the economic indicator snapshot
    Indicators {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let log_level = cli.log_level;
    match cli.command {
        Command::Report {
            config,
            symbol,
            period,
            output,
        } => run_report(
            &config,
            &symbol,
            period.as_deref(),
            output.as_deref(),
            log_level.as_deref(),
        ),
        Command::Signals {
            config,
            symbol,
            period,
            tail,
        } => run_signals_cmd(&config, &symbol, period.as_deref(), tail, log_level.as_deref()),
        Command::Indicators { config } => run_indicators(&config, log_level.as_deref()),
        Command::Validate { config } => run_validate(&config, log_level.as_deref()),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

fn fail(err: &MarketPulseError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}

/// Load the config file and install logging from it.
fn setup(config_path: &Path, log_level: Option<&str>) -> Result<FileConfigAdapter, ExitCode> {
    let config = load_config(config_path)?;
    let level = log_level
        .map(str::to_string)
        .or_else(|| config.get_string("logging", "level"))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    init_logging(&level);
    info!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Load and validate config, returning the analysis parameters.
fn prepare(
    config_path: &Path,
    log_level: Option<&str>,
) -> Result<(FileConfigAdapter, AnalysisParams), ExitCode> {
    let config = setup(config_path, log_level)?;
    validate_analysis_config(&config).map_err(|e| fail(&e))?;
    validate_data_config(&config).map_err(|e| fail(&e))?;
    validate_economic_config(&config).map_err(|e| fail(&e))?;
    let params = AnalysisParams::from_config(&config);
    Ok((config, params))
}

/// `--period` wins over `[data] period`; both fall back to one year.
pub fn resolve_period(
    period_override: Option<&str>,
    config: &dyn ConfigPort,
) -> Result<Period, MarketPulseError> {
    match period_override.map(str::to_string).or_else(|| config.get_string("data", "period")) {
        Some(p) => p.parse(),
        None => Ok(Period::default()),
    }
}

/// Economic indicators to correlate against closes, from `[economic] correlate`.
pub fn auxiliary_names(config: &dyn ConfigPort) -> Vec<String> {
    config
        .get_list("economic", "correlate")
        .unwrap_or_else(|| DEFAULT_AUXILIARY.iter().map(|s| s.to_string()).collect())
}

/// Build the data source named by `[data] source`.
pub fn build_data_port(config: &dyn ConfigPort) -> Result<Box<dyn DataPort>, MarketPulseError> {
    let source = config
        .get_string("data", "source")
        .unwrap_or_else(|| "synthetic".to_string())
        .to_lowercase();

    match source.as_str() {
        "synthetic" => {
            let seed = config.get_int("data", "seed", DEFAULT_SEED) as u64;
            let end_date = match config.get_string("data", "end_date") {
                Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|e| {
                    MarketPulseError::ConfigInvalid {
                        section: "data".into(),
                        key: "end_date".into(),
                        reason: e.to_string(),
                    }
                })?,
                None => Local::now().date_naive(),
            };
            info!(seed, end_date = %end_date, "using synthetic data source");
            Ok(Box::new(SyntheticAdapter::new(seed, end_date)))
        }
        "csv" => {
            let dir = config
                .get_string("data", "csv_dir")
                .unwrap_or_else(|| DEFAULT_CSV_DIR.to_string());
            info!(dir = %dir, "using CSV data source");
            Ok(Box::new(CsvAdapter::new(PathBuf::from(dir))))
        }
        other => Err(MarketPulseError::ConfigInvalid {
            section: "data".into(),
            key: "source".into(),
            reason: format!("unknown data source '{}'", other),
        }),
    }
}

fn run_report(
    config_path: &Path,
    symbol: &str,
    period_override: Option<&str>,
    output: Option<&Path>,
    log_level: Option<&str>,
) -> ExitCode {
    let (config, params) = match prepare(config_path, log_level) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let period = match resolve_period(period_override, &config) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };
    let data_port = match build_data_port(&config) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };
    let economic = StaticEconomicAdapter::from_config(&config);

    let request = ReportRequest {
        symbol: symbol.to_uppercase(),
        period,
        auxiliary: auxiliary_names(&config),
        generated_at: Local::now().naive_local(),
    };
    info!(symbol = %request.symbol, period = %period, "building report");

    let outcome = match build_report(data_port.as_ref(), &economic, &request, &params) {
        Ok(o) => o,
        Err(e) => return fail(&e),
    };

    if let Err(e) = TextReportAdapter::new().write(&outcome, output) {
        return fail(&e);
    }
    if let Some(path) = output {
        info!(path = %path.display(), "report written");
    }

    match outcome {
        ReportOutcome::Complete(_) => ExitCode::SUCCESS,
        ReportOutcome::DataUnavailable { symbol, reason } => {
            let err = MarketPulseError::DataUnavailable { symbol, reason };
            ExitCode::from(&err)
        }
    }
}

fn run_signals_cmd(
    config_path: &Path,
    symbol: &str,
    period_override: Option<&str>,
    tail: usize,
    log_level: Option<&str>,
) -> ExitCode {
    let (config, params) = match prepare(config_path, log_level) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let period = match resolve_period(period_override, &config) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };
    let data_port = match build_data_port(&config) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };

    let series = match data_port.fetch(symbol, period) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };
    let recommendation = match get_recommendation(&series, &params) {
        Ok(r) => r,
        Err(e) => return fail(&e),
    };

    let run = run_signals(&series, &params);
    let active = run.signals.iter().filter(|p| p.signal != Signal::Hold).count();
    info!(symbol = %series.symbol(), bars = series.len(), active, "signals generated");
    if series.len() <= params.warmup() {
        warn!(
            bars = series.len(),
            warmup = params.warmup(),
            "series shorter than indicator warmup; all signals are HOLD"
        );
    }

    println!("{}: {}", series.symbol(), recommendation);
    println!();
    println!(
        "{:<10}  {:>10}  {:>10}  {:>10}  {:>7}  {}",
        "date",
        "close",
        run.indicators.ma_short.indicator_type.to_string(),
        run.indicators.ma_long.indicator_type.to_string(),
        run.indicators.rsi.indicator_type.to_string(),
        "signal"
    );

    let fmt_value = |v: Option<f64>| v.map(|x| format!("{:.2}", x)).unwrap_or_else(|| "-".into());
    let start = series.len().saturating_sub(tail);
    for (i, bar) in series.bars().iter().enumerate().skip(start) {
        let signal = run.signals.get(i).map(|p| p.signal.to_string()).unwrap_or_default();
        println!(
            "{:<10}  {:>10.2}  {:>10}  {:>10}  {:>7}  {}",
            bar.date,
            bar.close,
            fmt_value(run.indicators.ma_short.get(i)),
            fmt_value(run.indicators.ma_long.get(i)),
            fmt_value(run.indicators.rsi.get(i)),
            signal
        );
    }

    ExitCode::SUCCESS
}

fn run_indicators(config_path: &Path, log_level: Option<&str>) -> ExitCode {
    let config = match setup(config_path, log_level) {
        Ok(c) => c,
        Err(code) => return code,
    };
    if let Err(e) = validate_economic_config(&config) {
        return fail(&e);
    }

    let snapshot = match StaticEconomicAdapter::from_config(&config).snapshot() {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };
    for (name, value) in snapshot.iter() {
        println!("{:<18} {}", name, value);
    }
    ExitCode::SUCCESS
}

fn run_validate(config_path: &Path, log_level: Option<&str>) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match setup(config_path, log_level) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_analysis_config(&config) {
        return fail(&e);
    }
    if let Err(e) = validate_data_config(&config) {
        return fail(&e);
    }
    if let Err(e) = validate_economic_config(&config) {
        return fail(&e);
    }

    let params = AnalysisParams::from_config(&config);
    eprintln!("\nAnalysis:");
    eprintln!("  moving averages: {} / {}", params.short_window, params.long_window);
    eprintln!(
        "  RSI({}) thresholds: {} / {}",
        params.rsi_period, params.oversold, params.overbought
    );
    eprintln!("  risk-free rate: {}", params.risk_free_rate);
    eprintln!(
        "  sentiment window: {} (neutral band {})",
        params.sentiment_window, params.neutral_band
    );

    match resolve_period(None, &config) {
        Ok(p) => eprintln!("\nData period: {}", p),
        Err(e) => return fail(&e),
    }
    eprintln!("Correlating against: {}", auxiliary_names(&config).join(", "));

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
