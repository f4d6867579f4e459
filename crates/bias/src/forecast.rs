//! Bias correction of short-range forecast tables.

use chrono::Datelike;
use tracing::debug;

use naiad_series::{FlowTable, TimeSeries};

use crate::cdf::{CdfMapper, Direction};
use crate::error::BiasError;

/// Which end of the forecast horizon fixes the reference calendar month.
///
/// Forecasts are short (a couple of weeks at most), so one month's mapping
/// is applied uniformly across the whole horizon even when it straddles a
/// month boundary. The choice is only which end anchors that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceMonth {
    /// The month of the first forecast timestamp.
    #[default]
    First,
    /// The month of the last forecast timestamp.
    Last,
}

/// Corrects every column of a forecast table against the historical
/// simulated/observed pair.
///
/// One to-probability mapper is fitted from the simulated data of the
/// reference month and one to-flow mapper from the observed data of the
/// same month, then the composed transform is applied to every column
/// independently. Column names and the row index are preserved; NaN cells
/// pass through unchanged. Both mappers extrapolate, since forecast values
/// routinely exceed the historical range.
///
/// # Errors
///
/// Returns [`BiasError::InvalidArgument`] for an empty forecast table and
/// [`BiasError::MissingReferenceMonth`] when either historical series has
/// no data in the reference month.
pub fn correct_forecast(
    forecast: &FlowTable,
    simulated: &TimeSeries,
    observed: &TimeSeries,
    reference: ReferenceMonth,
) -> Result<FlowTable, BiasError> {
    let anchor = match reference {
        ReferenceMonth::First => forecast.timestamps().first(),
        ReferenceMonth::Last => forecast.timestamps().last(),
    }
    .ok_or_else(|| BiasError::InvalidArgument {
        reason: "forecast table has no rows".to_string(),
    })?;
    let month = anchor.month() as u8;

    let sim = simulated.month_partition(month).dropna();
    if sim.is_empty() {
        return Err(BiasError::MissingReferenceMonth {
            month,
            series: "simulated",
        });
    }
    let obs = observed.month_partition(month).dropna();
    if obs.is_empty() {
        return Err(BiasError::MissingReferenceMonth {
            month,
            series: "observed",
        });
    }

    debug!(
        month,
        n_sim = sim.len(),
        n_obs = obs.len(),
        n_columns = forecast.n_columns(),
        "correcting forecast against reference month"
    );

    let to_probability = CdfMapper::build(sim.values(), Direction::ToProbability, true)?;
    let to_flow = CdfMapper::build(obs.values(), Direction::ToFlow, true)?;

    forecast.map_columns(|_, column| {
        column
            .iter()
            .map(|&v| {
                if v.is_nan() {
                    return Ok(f64::NAN);
                }
                let p = to_probability.eval(v)?;
                to_flow.eval(p)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 0, 0, 0).unwrap()
    }

    fn history(month: u32, scale: f64) -> TimeSeries {
        let timestamps = (1..=10).map(|d| ts(2019, month, d)).collect();
        let values = (1..=10).map(|i| i as f64 * scale).collect();
        TimeSeries::new(timestamps, values, "Q").unwrap()
    }

    fn forecast_table(timestamps: Vec<DateTime<Utc>>, data: Vec<Vec<f64>>) -> FlowTable {
        let columns = (1..=data.len())
            .map(|i| format!("ensemble_{i:02}"))
            .collect();
        FlowTable::new(timestamps, columns, data).unwrap()
    }

    #[test]
    fn scaled_history_scales_every_column() {
        let sim = history(6, 1.0);
        let obs = history(6, 10.0);
        let fc = forecast_table(
            vec![ts(2020, 6, 1), ts(2020, 6, 2), ts(2020, 6, 3)],
            vec![vec![2.0, 5.0, 8.0], vec![3.0, 5.5, 9.0]],
        );

        let corrected = correct_forecast(&fc, &sim, &obs, ReferenceMonth::First).unwrap();
        assert_eq!(corrected.column_names(), fc.column_names());
        assert_eq!(corrected.timestamps(), fc.timestamps());

        let tolerance = 10.0 * CdfMapper::build(sim.values(), Direction::ToProbability, true)
            .unwrap()
            .bin_width();
        for (name, col) in fc.iter_columns() {
            let out = corrected.column(name).unwrap();
            for (orig, corr) in col.iter().zip(out) {
                assert!(
                    (corr - orig * 10.0).abs() <= tolerance,
                    "{orig} corrected to {corr}, expected ~{}",
                    orig * 10.0
                );
            }
        }
    }

    #[test]
    fn values_beyond_history_are_extrapolated() {
        let sim = history(6, 1.0);
        let obs = history(6, 10.0);
        // forecast peak well above the historical maximum of 10
        let fc = forecast_table(vec![ts(2020, 6, 1)], vec![vec![50.0]]);
        let corrected = correct_forecast(&fc, &sim, &obs, ReferenceMonth::First).unwrap();
        let v = corrected.column("ensemble_01").unwrap()[0];
        assert!(v.is_finite());
        assert!(v > 100.0, "extrapolated correction should exceed the observed max, got {v}");
    }

    #[test]
    fn reference_month_choice_matters_across_boundary() {
        let mut timestamps: Vec<DateTime<Utc>> = (1..=10).map(|d| ts(2019, 6, d)).collect();
        timestamps.extend((1..=10).map(|d| ts(2019, 7, d)));
        let sim_values: Vec<f64> = (1..=10).chain(1..=10).map(|i| i as f64).collect();
        // June observations run 2x the simulation, July runs 20x
        let obs_values: Vec<f64> = sim_values
            .iter()
            .enumerate()
            .map(|(i, v)| if i < 10 { v * 2.0 } else { v * 20.0 })
            .collect();
        let sim = TimeSeries::new(timestamps.clone(), sim_values, "Q").unwrap();
        let obs = TimeSeries::new(timestamps, obs_values, "Q").unwrap();

        // horizon runs June 30 .. July 1
        let fc = forecast_table(
            vec![ts(2020, 6, 30), ts(2020, 7, 1)],
            vec![vec![5.0, 5.0]],
        );
        let first = correct_forecast(&fc, &sim, &obs, ReferenceMonth::First).unwrap();
        let last = correct_forecast(&fc, &sim, &obs, ReferenceMonth::Last).unwrap();
        // same input value, different reference month, different mapping
        let f = first.column("ensemble_01").unwrap();
        let l = last.column("ensemble_01").unwrap();
        assert_eq!(f[0], f[1], "one mapping must cover the whole horizon");
        assert_eq!(l[0], l[1]);
        assert!(l[0] > 2.0 * f[0], "July mapping should scale well past June's");
    }

    #[test]
    fn nan_cells_pass_through() {
        let sim = history(6, 1.0);
        let obs = history(6, 10.0);
        let fc = forecast_table(
            vec![ts(2020, 6, 1), ts(2020, 6, 2)],
            vec![vec![5.0, f64::NAN]],
        );
        let corrected = correct_forecast(&fc, &sim, &obs, ReferenceMonth::First).unwrap();
        let col = corrected.column("ensemble_01").unwrap();
        assert!(col[0].is_finite());
        assert!(col[1].is_nan());
    }

    #[test]
    fn empty_forecast_rejected() {
        let sim = history(6, 1.0);
        let obs = history(6, 10.0);
        let fc = FlowTable::new(vec![], vec!["q".to_string()], vec![vec![]]).unwrap();
        assert!(matches!(
            correct_forecast(&fc, &sim, &obs, ReferenceMonth::First),
            Err(BiasError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn missing_reference_month_named() {
        let sim = history(6, 1.0);
        let obs = history(7, 10.0); // no June observations
        let fc = forecast_table(vec![ts(2020, 6, 1)], vec![vec![5.0]]);
        assert!(matches!(
            correct_forecast(&fc, &sim, &obs, ReferenceMonth::First),
            Err(BiasError::MissingReferenceMonth {
                month: 6,
                series: "observed",
            })
        ));
    }

    #[test]
    fn input_table_not_mutated() {
        let sim = history(6, 1.0);
        let obs = history(6, 10.0);
        let fc = forecast_table(vec![ts(2020, 6, 1)], vec![vec![5.0]]);
        let before = fc.clone();
        let _ = correct_forecast(&fc, &sim, &obs, ReferenceMonth::First).unwrap();
        assert_eq!(fc, before);
    }
}
