//! Lookback periods accepted by data sources.

use crate::domain::error::MarketPulseError;
use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    OneDay,
    FiveDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    #[default]
    OneYear,
    TwoYears,
    FiveYears,
    TenYears,
    YearToDate,
    Max,
}

impl Period {
    /// First calendar date included when the period ends on `end`.
    /// `None` for [`Period::Max`].
    pub fn start_date(self, end: NaiveDate) -> Option<NaiveDate> {
        let months_back = |m: u32| {
            end.checked_sub_months(Months::new(m))
                .map(|d| d.succ_opt().unwrap_or(d))
        };
        match self {
            Period::OneDay => Some(end),
            Period::FiveDays => end.checked_sub_days(chrono::Days::new(4)),
            Period::OneMonth => months_back(1),
            Period::ThreeMonths => months_back(3),
            Period::SixMonths => months_back(6),
            Period::OneYear => months_back(12),
            Period::TwoYears => months_back(24),
            Period::FiveYears => months_back(60),
            Period::TenYears => months_back(120),
            Period::YearToDate => NaiveDate::from_ymd_opt(end.year(), 1, 1),
            Period::Max => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::FiveDays => "5d",
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
            Period::TenYears => "10y",
            Period::YearToDate => "ytd",
            Period::Max => "max",
        }
    }
}

impl FromStr for Period {
    type Err = MarketPulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1d" => Ok(Period::OneDay),
            "5d" => Ok(Period::FiveDays),
            "1mo" => Ok(Period::OneMonth),
            "3mo" => Ok(Period::ThreeMonths),
            "6mo" => Ok(Period::SixMonths),
            "1y" => Ok(Period::OneYear),
            "2y" => Ok(Period::TwoYears),
            "5y" => Ok(Period::FiveYears),
            "10y" => Ok(Period::TenYears),
            "ytd" => Ok(Period::YearToDate),
            "max" => Ok(Period::Max),
            _ => Err(MarketPulseError::InvalidPeriod(s.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_all_periods() {
        for s in ["1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y", "10y", "ytd", "max"] {
            let period: Period = s.parse().unwrap();
            assert_eq!(period.to_string(), s);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("1Y".parse::<Period>().unwrap(), Period::OneYear);
        assert_eq!(" YTD ".parse::<Period>().unwrap(), Period::YearToDate);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "7w".parse::<Period>().unwrap_err();
        assert!(matches!(err, MarketPulseError::InvalidPeriod(ref s) if s == "7w"));
    }

    #[test]
    fn default_is_one_year() {
        assert_eq!(Period::default(), Period::OneYear);
    }

    #[test]
    fn start_dates() {
        let end = date(2024, 12, 31);
        assert_eq!(Period::OneDay.start_date(end), Some(end));
        assert_eq!(Period::FiveDays.start_date(end), Some(date(2024, 12, 27)));
        assert_eq!(Period::OneMonth.start_date(end), Some(date(2024, 12, 1)));
        assert_eq!(Period::OneYear.start_date(end), Some(date(2024, 1, 1)));
        assert_eq!(Period::YearToDate.start_date(end), Some(date(2024, 1, 1)));
        assert_eq!(Period::Max.start_date(end), None);
    }

    #[test]
    fn one_year_spans_365_days_in_common_year() {
        let end = date(2023, 6, 30);
        let start = Period::OneYear.start_date(end).unwrap();
        assert_eq!((end - start).num_days() + 1, 365);
    }
}
