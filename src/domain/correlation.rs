//! Pearson correlation between prices and auxiliary series.

use crate::domain::numeric::mean;
use crate::domain::time_series::TimeSeries;
use std::collections::BTreeMap;
use tracing::warn;

pub const VOLUME_VS_VOLATILITY: &str = "volume_vs_volatility";

/// Pearson correlation coefficient clamped to [-1, 1].
///
/// `None` for mismatched lengths, fewer than two points, non-finite input,
/// or zero variance on either side.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return None;
    }

    let mx = mean(x)?;
    let my = mean(y)?;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

pub fn correlation_key(name: &str) -> String {
    format!("price_vs_{}", name)
}

/// Correlate closes with each auxiliary series (keyed `price_vs_<name>`) and
/// volume with absolute daily returns (keyed [`VOLUME_VS_VOLATILITY`]).
///
/// Auxiliary series must be date-aligned with `series`; ones of a different
/// length are skipped. Undefined coefficients are omitted.
pub fn correlate(
    series: &TimeSeries,
    auxiliary: &BTreeMap<String, Vec<f64>>,
) -> BTreeMap<String, f64> {
    let mut out = BTreeMap::new();
    if series.is_empty() {
        return out;
    }

    let closes = series.closes();
    for (name, values) in auxiliary {
        if values.len() != closes.len() {
            warn!(
                name = %name,
                expected = closes.len(),
                actual = values.len(),
                "skipping auxiliary series with mismatched length"
            );
            continue;
        }
        if let Some(r) = pearson(&closes, values) {
            out.insert(correlation_key(name), r);
        }
    }

    // Aligned pairwise from index 1; pairs with a zero previous close are dropped.
    let bars = series.bars();
    let (volumes, abs_returns): (Vec<f64>, Vec<f64>) = bars
        .windows(2)
        .filter_map(|w| {
            w[1].return_from(w[0].close)
                .map(|r| (w[1].volume as f64, r.abs()))
        })
        .unzip();
    if let Some(r) = pearson(&volumes, &abs_returns) {
        out.insert(VOLUME_VS_VOLATILITY.to_string(), r);
    }

    out
}
