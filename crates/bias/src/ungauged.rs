//! Bias correction of ungauged reaches via precomputed scalar curves.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, warn};

use naiad_fdc::{build_fdc, MonthlySfdc, ScalarFdc};
use naiad_series::TimeSeries;

use crate::config::CorrectionConfig;
use crate::error::BiasError;
use crate::interp::{make_interpolator, FillMode, Interp1d};

/// Corrects a simulated series for an ungauged reach with the default
/// configuration.
///
/// See [`correct_ungauged_with`].
pub fn correct_ungauged(
    simulated: &TimeSeries,
    sfdc: &MonthlySfdc,
) -> Result<TimeSeries, BiasError> {
    correct_ungauged_with(simulated, sfdc, &CorrectionConfig::new())
}

/// Corrects a simulated series for a reach without observations, using a
/// precomputed monthly scalar flow-duration table.
///
/// For each calendar month present in `simulated`: clip negative flows to
/// zero, locate each flow's exceedance percentile on the month's own
/// flow-duration curve, look up the correction scalar at that percentile
/// in the month's scalar curve, and divide the flow by it. Both lookups
/// extrapolate to the nearest end of their domain. Months are processed
/// in parallel and reassembled sorted by timestamp.
///
/// # Errors
///
/// A month present in `simulated` but absent (or fully dropped) in the
/// table fails with [`BiasError::MissingSfdcMonth`] unless
/// [`CorrectionConfig::with_skip_missing_months`] was set. A zero or
/// non-finite scalar at a looked-up percentile fails with
/// [`BiasError::ZeroScalar`] rather than emitting `inf`.
pub fn correct_ungauged_with(
    simulated: &TimeSeries,
    sfdc: &MonthlySfdc,
    config: &CorrectionConfig,
) -> Result<TimeSeries, BiasError> {
    config.validate()?;

    let months = simulated.unique_months();
    let per_month: Vec<Vec<(DateTime<Utc>, f64)>> = months
        .into_par_iter()
        .map(|month| correct_month(simulated, sfdc, month, config))
        .collect::<Result<_, _>>()?;

    let pairs: Vec<(DateTime<Utc>, f64)> = per_month.into_iter().flatten().collect();
    Ok(TimeSeries::from_unsorted(pairs, simulated.label())?)
}

fn correct_month(
    simulated: &TimeSeries,
    sfdc: &MonthlySfdc,
    month: u8,
    config: &CorrectionConfig,
) -> Result<Vec<(DateTime<Utc>, f64)>, BiasError> {
    let part = simulated.month_partition(month).dropna();
    if part.is_empty() {
        return Ok(Vec::new());
    }

    let curve = match sfdc.curve(month) {
        Some(c) if !c.is_empty() => c,
        _ => {
            if config.skip_missing_months() {
                warn!(month, "no scalar curve; month left out of the output");
                return Ok(Vec::new());
            }
            return Err(BiasError::MissingSfdcMonth { month });
        }
    };

    let clipped: Vec<f64> = part.values().iter().map(|v| v.max(0.0)).collect();
    debug!(month, n = clipped.len(), "correcting month against scalar curve");

    let flow_to_percentile = month_percentile_lookup(&clipped, month, config, simulated.label())?;
    let percentile_to_scalar = scalar_lookup(curve)?;

    part.timestamps()
        .iter()
        .zip(&clipped)
        .map(|(&ts, &flow)| {
            let percentile = flow_to_percentile.eval(flow)?;
            let scalar = percentile_to_scalar.eval(percentile)?;
            if scalar == 0.0 || !scalar.is_finite() {
                return Err(BiasError::ZeroScalar { month, percentile });
            }
            Ok((ts, flow / scalar))
        })
        .collect()
}

/// A one-dimensional lookup that may have collapsed to a constant.
enum Lookup {
    Constant(f64),
    Interp(Interp1d),
}

impl Lookup {
    fn eval(&self, x: f64) -> Result<f64, BiasError> {
        match self {
            Lookup::Constant(v) => Ok(*v),
            Lookup::Interp(f) => f.eval(x),
        }
    }
}

/// Builds the flow -> exceedance-percentile lookup from the month's own
/// flow-duration curve.
///
/// The curve's rows are reversed so flow ascends; a tied flow keeps its
/// highest exceedance probability. A month with a single distinct flow
/// value collapses to a constant percentile.
fn month_percentile_lookup(
    flows: &[f64],
    month: u8,
    config: &CorrectionConfig,
    label: &str,
) -> Result<Lookup, BiasError> {
    let fdc = build_fdc(flows, config.steps(), label)?;

    let mut xs = Vec::with_capacity(fdc.len());
    let mut ys = Vec::with_capacity(fdc.len());
    for (p, flow) in fdc.iter().rev() {
        if xs.last().is_none_or(|&last| flow > last) {
            xs.push(flow);
            ys.push(p);
        }
    }

    if xs.len() < 2 {
        debug!(month, "single-valued month; percentile lookup is constant");
        return Ok(Lookup::Constant(ys[0]));
    }
    Ok(Lookup::Interp(make_interpolator(
        &xs,
        &ys,
        FillMode::Nearest,
        None,
    )?))
}

/// Builds the exceedance-percentile -> scalar lookup from one month's
/// scalar curve. A single-row curve collapses to a constant.
fn scalar_lookup(curve: &ScalarFdc) -> Result<Lookup, BiasError> {
    if curve.len() < 2 {
        return Ok(Lookup::Constant(curve.ratios()[0]));
    }
    Ok(Lookup::Interp(make_interpolator(
        curve.probabilities(),
        curve.ratios(),
        FillMode::Nearest,
        None,
    )?))
}
