//! CLI orchestration tests: config loading, validation, period and data
//! source resolution, using real INI and CSV files on disk.

mod common;

use common::*;
use marketpulse::adapters::file_config_adapter::FileConfigAdapter;
use marketpulse::cli;
use marketpulse::domain::config_validation::{
    validate_analysis_config, validate_data_config, validate_economic_config,
};
use marketpulse::domain::error::MarketPulseError;
use marketpulse::domain::period::Period;
use marketpulse::domain::signal::get_recommendation;
use marketpulse::domain::strategy::AnalysisParams;
use marketpulse::ports::data_port::DataPort;
use std::io::Write;

fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const VALID_INI: &str = r#"
[analysis]
short_window = 10
long_window = 30
rsi_period = 14
oversold = 25
overbought = 75
risk_free_rate = 0.03
sentiment_window = 5

[data]
source = synthetic
period = 6mo
seed = 11
end_date = 2024-06-30

[economic]
interest_rate_us = 4.75
correlate = interest_rate_us, vix_index

[logging]
level = warn
"#;

mod config_loading {
    use super::*;

    #[test]
    fn load_valid_config() {
        let file = write_temp_ini(VALID_INI);
        let config = cli::load_config(file.path()).unwrap();

        assert!(validate_analysis_config(&config).is_ok());
        assert!(validate_data_config(&config).is_ok());
        assert!(validate_economic_config(&config).is_ok());

        let params = AnalysisParams::from_config(&config);
        assert_eq!(params.short_window, 10);
        assert_eq!(params.long_window, 30);
        assert_eq!(params.oversold, 25.0);
        assert_eq!(params.risk_free_rate, 0.03);
        assert_eq!(params.neutral_band, AnalysisParams::default().neutral_band);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(cli::load_config(&dir.path().join("absent.ini")).is_err());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let file = write_temp_ini("");
        let config = cli::load_config(file.path()).unwrap();

        assert!(validate_analysis_config(&config).is_ok());
        assert!(validate_data_config(&config).is_ok());
        assert_eq!(AnalysisParams::from_config(&config), AnalysisParams::default());
    }

    #[test]
    fn inverted_windows_are_rejected() {
        let config =
            FileConfigAdapter::from_string("[analysis]\nshort_window = 50\nlong_window = 20\n")
                .unwrap();
        let err = validate_analysis_config(&config).unwrap_err();
        assert!(matches!(err, MarketPulseError::ConfigInvalid { .. }));
    }

    #[test]
    fn unparseable_numbers_are_rejected() {
        let file = write_temp_ini("[analysis]\nshort_window = abc\n\n[economic]\nvix_index = high\n");
        let config = cli::load_config(file.path()).unwrap();

        assert!(matches!(
            validate_analysis_config(&config),
            Err(MarketPulseError::ConfigInvalid { ref key, .. }) if key == "short_window"
        ));
        assert!(matches!(
            validate_economic_config(&config),
            Err(MarketPulseError::ConfigInvalid { ref key, .. }) if key == "vix_index"
        ));
    }

    #[test]
    fn unknown_source_is_rejected() {
        let config = FileConfigAdapter::from_string("[data]\nsource = bloomberg\n").unwrap();
        assert!(validate_data_config(&config).is_err());
        assert!(matches!(
            cli::build_data_port(&config),
            Err(MarketPulseError::ConfigInvalid { .. })
        ));
    }
}

mod resolution {
    use super::*;

    #[test]
    fn period_override_wins() {
        let config = FileConfigAdapter::from_string(VALID_INI).unwrap();
        assert_eq!(cli::resolve_period(None, &config).unwrap(), Period::SixMonths);
        assert_eq!(cli::resolve_period(Some("5d"), &config).unwrap(), Period::FiveDays);
    }

    #[test]
    fn period_defaults_to_one_year() {
        let config = FileConfigAdapter::from_string("").unwrap();
        assert_eq!(cli::resolve_period(None, &config).unwrap(), Period::OneYear);
    }

    #[test]
    fn bad_period_override() {
        let config = FileConfigAdapter::from_string("").unwrap();
        assert!(matches!(
            cli::resolve_period(Some("3w"), &config),
            Err(MarketPulseError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn auxiliary_names_from_config() {
        let config = FileConfigAdapter::from_string(VALID_INI).unwrap();
        assert_eq!(cli::auxiliary_names(&config), vec!["interest_rate_us", "vix_index"]);
    }

    #[test]
    fn auxiliary_names_default() {
        let config = FileConfigAdapter::from_string("").unwrap();
        assert_eq!(cli::auxiliary_names(&config), cli::DEFAULT_AUXILIARY.to_vec());
    }
}

mod data_sources {
    use super::*;

    #[test]
    fn synthetic_source_from_config() {
        let config = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let port = cli::build_data_port(&config).unwrap();
        let series = port.fetch("AAPL", Period::OneMonth).unwrap();

        assert_eq!(series.last().unwrap().date, date("2024-06-30"));
        assert_eq!(series.first().unwrap().date, date("2024-05-31"));

        let again = cli::build_data_port(&config).unwrap().fetch("AAPL", Period::OneMonth).unwrap();
        assert_eq!(series, again);
    }

    #[test]
    fn synthetic_bad_end_date() {
        let config =
            FileConfigAdapter::from_string("[data]\nsource = synthetic\nend_date = 30/06/2024\n")
                .unwrap();
        assert!(validate_data_config(&config).is_err());
        assert!(cli::build_data_port(&config).is_err());
    }

    #[test]
    fn csv_source_from_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut csv = String::from("date,open,high,low,close,volume\n");
        for (i, close) in [100.0, 102.0, 101.0, 105.0, 103.0].iter().enumerate() {
            csv.push_str(&format!(
                "2024-03-0{},{c},{c},{c},{c},1000\n",
                i + 1,
                c = close
            ));
        }
        std::fs::write(dir.path().join("ACME.csv"), csv).unwrap();

        let ini = format!("[data]\nsource = csv\ncsv_dir = {}\n", dir.path().display());
        let config = FileConfigAdapter::from_string(&ini).unwrap();
        let port = cli::build_data_port(&config).unwrap();

        let series = port.fetch("acme", Period::Max).unwrap();
        assert_eq!(series.len(), 5);
        assert_eq!(series.symbol(), "ACME");

        let rec = get_recommendation(&series, &AnalysisParams::default()).unwrap();
        assert_eq!(rec.price, 103.0);
        assert_eq!(rec.date, date("2024-03-05"));
    }

    #[test]
    fn csv_missing_symbol_is_unavailable() {
        let dir = tempfile::TempDir::new().unwrap();
        let ini = format!("[data]\nsource = csv\ncsv_dir = {}\n", dir.path().display());
        let config = FileConfigAdapter::from_string(&ini).unwrap();
        let port = cli::build_data_port(&config).unwrap();

        assert!(matches!(
            port.fetch("NOPE", Period::OneYear),
            Err(MarketPulseError::DataUnavailable { .. })
        ));
    }
}
