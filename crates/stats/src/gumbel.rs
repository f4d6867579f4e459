//! Gumbel Type-I return-period estimates from annual flow extremes.

use std::collections::BTreeMap;

use chrono::Datelike;
use naiad_series::TimeSeries;

/// Return periods (years) reported when the caller does not choose.
pub const DEFAULT_RETURN_PERIODS: [u32; 6] = [2, 5, 10, 25, 50, 100];

/// Solves the Gumbel Type-I distribution for one return period.
///
/// `xbar` and `std` are the mean and (population) standard deviation of the
/// annual extreme flows. Uses the method-of-moments form
/// `-ln(-ln(1 - 1/rp)) * std * 0.7797 + xbar - 0.45 * std`.
pub fn gumbel1(rp: f64, xbar: f64, std: f64) -> f64 {
    -(-(1.0 - 1.0 / rp).ln()).ln() * std * 0.7797 + xbar - 0.45 * std
}

/// Annual extreme (max or min) of the non-NaN values in each calendar year.
///
/// Years with no valid values contribute nothing.
fn annual_extremes(series: &TimeSeries, max: bool) -> Vec<f64> {
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for (ts, v) in series.iter() {
        if v.is_nan() {
            continue;
        }
        by_year
            .entry(ts.year())
            .and_modify(|e| {
                if (max && v > *e) || (!max && v < *e) {
                    *e = v;
                }
            })
            .or_insert(v);
    }
    by_year.into_values().collect()
}

/// High-flow return periods from the annual maxima of a retrospective
/// simulation.
///
/// Returns one estimate per requested return period, keyed by the period
/// in years. An empty series (or one with only NaN values) yields an empty
/// map.
pub fn return_periods(series: &TimeSeries, rps: &[u32]) -> BTreeMap<u32, f64> {
    let maxima = annual_extremes(series, true);
    if maxima.is_empty() {
        return BTreeMap::new();
    }
    let xbar = crate::mean(&maxima);
    let std = crate::sd_pop(&maxima);
    rps.iter()
        .map(|&rp| (rp, gumbel1(rp as f64, xbar, std)))
        .collect()
}

/// Low-flow return periods from the annual minima, floored at zero.
pub fn low_return_periods(series: &TimeSeries, rps: &[u32]) -> BTreeMap<u32, f64> {
    let minima = annual_extremes(series, false);
    if minima.is_empty() {
        return BTreeMap::new();
    }
    let xbar = crate::mean(&minima);
    let std = crate::sd_pop(&minima);
    rps.iter()
        .map(|&rp| (rp, gumbel1(rp as f64, xbar, std).max(0.0)))
        .collect()
}
