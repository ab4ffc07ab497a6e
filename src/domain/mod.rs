//! Core domain types and logic.

pub mod ohlcv;
pub mod time_series;
pub mod period;
pub mod indicator;
pub mod numeric;
pub mod signal;
pub mod statistics;
pub mod correlation;
pub mod economic;
pub mod strategy;
pub mod report;
pub mod config_validation;
pub mod error;
