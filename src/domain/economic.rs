//! Macro-economic indicator snapshot.

use crate::ports::config_port::ConfigPort;

/// Point-in-time values of the tracked macro indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct EconomicIndicators {
    /// Percent.
    pub interest_rate_us: f64,
    /// Percent.
    pub interest_rate_eu: f64,
    /// Percent.
    pub inflation_rate: f64,
    /// Percent.
    pub unemployment_rate: f64,
    /// Percent.
    pub gdp_growth: f64,
    /// USD per barrel.
    pub oil_price: f64,
    /// USD per ounce.
    pub gold_price: f64,
    pub vix_index: f64,
}

pub const INDICATOR_NAMES: [&str; 8] = [
    "interest_rate_us",
    "interest_rate_eu",
    "inflation_rate",
    "unemployment_rate",
    "gdp_growth",
    "oil_price",
    "gold_price",
    "vix_index",
];

impl Default for EconomicIndicators {
    fn default() -> Self {
        Self {
            interest_rate_us: 5.25,
            interest_rate_eu: 4.50,
            inflation_rate: 3.2,
            unemployment_rate: 3.8,
            gdp_growth: 2.1,
            oil_price: 85.50,
            gold_price: 2050.00,
            vix_index: 15.5,
        }
    }
}

impl EconomicIndicators {
    /// Read the `[economic]` section; missing keys keep their default value.
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let d = Self::default();
        let get = |key: &str, default: f64| config.get_double("economic", key, default);
        Self {
            interest_rate_us: get("interest_rate_us", d.interest_rate_us),
            interest_rate_eu: get("interest_rate_eu", d.interest_rate_eu),
            inflation_rate: get("inflation_rate", d.inflation_rate),
            unemployment_rate: get("unemployment_rate", d.unemployment_rate),
            gdp_growth: get("gdp_growth", d.gdp_growth),
            oil_price: get("oil_price", d.oil_price),
            gold_price: get("gold_price", d.gold_price),
            vix_index: get("vix_index", d.vix_index),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "interest_rate_us" => Some(self.interest_rate_us),
            "interest_rate_eu" => Some(self.interest_rate_eu),
            "inflation_rate" => Some(self.inflation_rate),
            "unemployment_rate" => Some(self.unemployment_rate),
            "gdp_growth" => Some(self.gdp_growth),
            "oil_price" => Some(self.oil_price),
            "gold_price" => Some(self.gold_price),
            "vix_index" => Some(self.vix_index),
            _ => None,
        }
    }

    /// `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        INDICATOR_NAMES
            .iter()
            .filter_map(move |&name| self.get(name).map(|v| (name, v)))
    }
}
