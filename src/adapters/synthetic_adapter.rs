//! Deterministic synthetic market data.
//!
//! Produces one bar per calendar day as a seeded random walk. The RNG seed is
//! derived from the configured seed and the symbol, so the same inputs always
//! give the same series while different symbols get different paths.

use crate::domain::error::MarketPulseError;
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::period::Period;
use crate::domain::time_series::TimeSeries;
use crate::ports::data_port::DataPort;
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

const START_PRICE: f64 = 100.0;
const MAX_DAILY_STEP: f64 = 1.0;
const MAX_INTRADAY_SPREAD: f64 = 2.0;
const MIN_VOLUME: u64 = 1_000_000;
const MAX_VOLUME: u64 = 10_000_000;
/// Number of days generated for [`Period::Max`].
const MAX_PERIOD_DAYS: u64 = 365;
const PRICE_FLOOR: f64 = 1.0;

pub struct SyntheticAdapter {
    seed: u64,
    end_date: NaiveDate,
}

impl SyntheticAdapter {
    pub fn new(seed: u64, end_date: NaiveDate) -> Self {
        Self { seed, end_date }
    }

    fn rng_for(&self, symbol: &str) -> StdRng {
        // FNV-1a over the symbol, mixed with the configured seed
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in symbol.to_uppercase().bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        StdRng::seed_from_u64(self.seed ^ hash)
    }

    fn start_date(&self, period: Period) -> NaiveDate {
        period
            .start_date(self.end_date)
            .or_else(|| self.end_date.checked_sub_days(Days::new(MAX_PERIOD_DAYS - 1)))
            .unwrap_or(self.end_date)
    }
}

impl DataPort for SyntheticAdapter {
    fn fetch(&self, symbol: &str, period: Period) -> Result<TimeSeries, MarketPulseError> {
        if symbol.trim().is_empty() {
            return Err(MarketPulseError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "empty symbol".into(),
            });
        }

        let mut rng = self.rng_for(symbol);
        let mut close = START_PRICE;
        let mut bars = Vec::new();

        let mut date = self.start_date(period);
        while date <= self.end_date {
            let open = close;
            close = (close + rng.gen_range(-MAX_DAILY_STEP..MAX_DAILY_STEP)).max(PRICE_FLOOR);
            let high = open.max(close) + rng.gen_range(0.0..MAX_INTRADAY_SPREAD);
            let low = (open.min(close) - rng.gen_range(0.0..MAX_INTRADAY_SPREAD)).max(0.0);

            bars.push(OhlcvBar {
                date,
                open,
                high,
                low,
                close,
                volume: rng.gen_range(MIN_VOLUME..MAX_VOLUME),
            });

            date = match date.succ_opt() {
                Some(d) => d,
                None => break,
            };
        }

        debug!(symbol, period = %period, bars = bars.len(), seed = self.seed, "generated synthetic series");
        TimeSeries::new(symbol.to_uppercase(), bars)
    }
}
