//! Economic indicators from configuration, with seeded synthetic history.

use crate::domain::economic::EconomicIndicators;
use crate::domain::error::MarketPulseError;
use crate::ports::config_port::ConfigPort;
use crate::ports::economic_port::EconomicPort;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_HISTORY_SEED: u64 = 7;
/// Largest daily move of a synthetic history, as a fraction of the snapshot value.
const HISTORY_STEP_FRACTION: f64 = 0.01;

pub struct StaticEconomicAdapter {
    indicators: EconomicIndicators,
    history_seed: u64,
}

impl StaticEconomicAdapter {
    pub fn new(indicators: EconomicIndicators, history_seed: u64) -> Self {
        Self {
            indicators,
            history_seed,
        }
    }

    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let seed = config.get_int("economic", "history_seed", DEFAULT_HISTORY_SEED as i64);
        Self::new(EconomicIndicators::from_config(config), seed as u64)
    }
}

impl EconomicPort for StaticEconomicAdapter {
    fn snapshot(&self) -> Result<EconomicIndicators, MarketPulseError> {
        Ok(self.indicators.clone())
    }

    /// Random walk that ends at the snapshot value on the last date.
    fn history(&self, name: &str, dates: &[NaiveDate]) -> Result<Vec<f64>, MarketPulseError> {
        let current = self
            .indicators
            .get(name)
            .ok_or_else(|| MarketPulseError::DataUnavailable {
                symbol: name.to_string(),
                reason: "unknown economic indicator".into(),
            })?;

        let name_salt = name.bytes().fold(0u64, |acc, b| acc.rotate_left(5) ^ u64::from(b));
        let mut rng = StdRng::seed_from_u64(self.history_seed ^ name_salt);
        let step = current.abs().max(1.0) * HISTORY_STEP_FRACTION;

        let mut values = vec![0.0; dates.len()];
        let mut value = current;
        for slot in values.iter_mut().rev() {
            *slot = value;
            value -= rng.gen_range(-step..step);
        }
        Ok(values)
    }
}
