//! Bias correction of a retrospective simulation against observations.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, warn};

use naiad_series::TimeSeries;

use crate::cdf::{CdfMapper, Direction};
use crate::config::CorrectionConfig;
use crate::error::BiasError;

/// Corrects a simulated series against a paired observed series with the
/// default configuration (no extrapolation, missing observed months fail).
///
/// See [`correct_historical_with`].
pub fn correct_historical(
    simulated: &TimeSeries,
    observed: &TimeSeries,
) -> Result<TimeSeries, BiasError> {
    correct_historical_with(simulated, observed, &CorrectionConfig::new())
}

/// Corrects a simulated series against a paired observed series.
///
/// For each calendar month present in `simulated`: fit the month's
/// empirical CDF from the simulated sample, fit the inverse CDF from the
/// observed sample of the same month, then push every simulated value
/// through `to_flow(to_probability(value))`. NaN rows are dropped per
/// month before fitting and do not appear in the output. Months are
/// processed in parallel and reassembled sorted by timestamp.
///
/// # Errors
///
/// A month present in `simulated` but empty in `observed` fails with
/// [`BiasError::MissingObservedMonth`] unless
/// [`CorrectionConfig::with_skip_missing_months`] was set, in which case
/// that month is dropped from the output with a warning. Mapper and
/// interpolation failures propagate; a failing month aborts the whole
/// call.
pub fn correct_historical_with(
    simulated: &TimeSeries,
    observed: &TimeSeries,
    config: &CorrectionConfig,
) -> Result<TimeSeries, BiasError> {
    config.validate()?;

    let months = simulated.unique_months();
    let per_month: Vec<Vec<(DateTime<Utc>, f64)>> = months
        .into_par_iter()
        .map(|month| correct_month(simulated, observed, month, config))
        .collect::<Result<_, _>>()?;

    let pairs: Vec<(DateTime<Utc>, f64)> = per_month.into_iter().flatten().collect();
    Ok(TimeSeries::from_unsorted(pairs, simulated.label())?)
}

fn correct_month(
    simulated: &TimeSeries,
    observed: &TimeSeries,
    month: u8,
    config: &CorrectionConfig,
) -> Result<Vec<(DateTime<Utc>, f64)>, BiasError> {
    let sim = simulated.month_partition(month).dropna();
    if sim.is_empty() {
        return Ok(Vec::new());
    }

    let obs = observed.month_partition(month).dropna();
    if obs.is_empty() {
        if config.skip_missing_months() {
            warn!(month, "no observed data; month left out of the output");
            return Ok(Vec::new());
        }
        return Err(BiasError::MissingObservedMonth { month });
    }

    debug!(
        month,
        n_sim = sim.len(),
        n_obs = obs.len(),
        "fitting monthly CDF pair"
    );

    let to_probability =
        CdfMapper::build(sim.values(), Direction::ToProbability, config.extrapolate())?;
    let to_flow = CdfMapper::build(obs.values(), Direction::ToFlow, config.extrapolate())?;

    sim.timestamps()
        .iter()
        .zip(sim.values())
        .map(|(&ts, &v)| {
            let p = to_probability.eval(v)?;
            Ok((ts, to_flow.eval(p)?))
        })
        .collect()
}
