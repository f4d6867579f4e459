//! Scalar flow-duration curves (simulated / observed ratio tables).

use std::collections::BTreeMap;

use crate::curve::FlowDurationCurve;
use crate::error::FdcError;

/// Tolerance when comparing two probability grids for equality.
const GRID_EPS: f64 = 1e-9;

/// A scalar flow-duration curve: exceedance probability against the ratio
/// `simulated_flow / observed_flow` at that probability.
///
/// Probabilities ascend; rows whose ratio was not finite (observed flow
/// exactly zero, or either flow NaN) are dropped at construction, so the
/// grid may be sparser than the source curves. Callers must not assume
/// full-grid coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarFdc {
    probabilities: Vec<f64>,
    ratios: Vec<f64>,
}

impl ScalarFdc {
    /// Creates a scalar curve from raw (probability, ratio) rows, sorting
    /// by probability and dropping non-finite ratios.
    ///
    /// # Errors
    ///
    /// Returns [`FdcError::DuplicateProbability`] (reported for month 0)
    /// if two surviving rows share a probability.
    pub fn from_rows(mut rows: Vec<(f64, f64)>) -> Result<Self, FdcError> {
        rows.retain(|(_, r)| r.is_finite());
        rows.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        for pair in rows.windows(2) {
            if (pair[1].0 - pair[0].0).abs() < GRID_EPS {
                return Err(FdcError::DuplicateProbability {
                    month: 0,
                    probability: pair[1].0,
                });
            }
        }
        let (probabilities, ratios) = rows.into_iter().unzip();
        Ok(Self {
            probabilities,
            ratios,
        })
    }

    /// Number of surviving rows.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Returns `true` if every row was dropped.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Exceedance probabilities (percent, ascending).
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Correction scalars aligned with [`Self::probabilities`].
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Iterates over (probability, ratio) rows in ascending probability.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.probabilities
            .iter()
            .copied()
            .zip(self.ratios.iter().copied())
    }
}

/// Divides a simulated curve by an observed curve, value for value at
/// matching exceedance probabilities.
///
/// Rows where the ratio is infinite or NaN (observed flow zero) are
/// dropped, silently shrinking the output's domain.
///
/// # Errors
///
/// Returns [`FdcError::GridMismatch`] if the two curves do not share the
/// same probability grid.
pub fn build_sfdc(
    sim_fdc: &FlowDurationCurve,
    obs_fdc: &FlowDurationCurve,
) -> Result<ScalarFdc, FdcError> {
    if sim_fdc.len() != obs_fdc.len() {
        return Err(FdcError::GridMismatch {
            reason: format!("lengths {} and {}", sim_fdc.len(), obs_fdc.len()),
        });
    }
    for (i, (ps, po)) in sim_fdc
        .probabilities()
        .iter()
        .zip(obs_fdc.probabilities())
        .enumerate()
    {
        if (ps - po).abs() > GRID_EPS {
            return Err(FdcError::GridMismatch {
                reason: format!("probabilities {ps} and {po} at row {i}"),
            });
        }
    }

    let rows = sim_fdc
        .iter()
        .zip(obs_fdc.flows())
        .map(|((p, sim), &obs)| (p, sim / obs))
        .collect();
    ScalarFdc::from_rows(rows)
}

/// A per-calendar-month table of scalar flow-duration curves, the
/// precomputed transform applied to ungauged reaches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySfdc {
    curves: BTreeMap<u8, ScalarFdc>,
}

impl MonthlySfdc {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from flat (month, probability, scalar) rows, the
    /// shape the table arrives in from storage.
    ///
    /// # Errors
    ///
    /// Returns [`FdcError::InvalidMonth`] for a month outside 1..=12 and
    /// [`FdcError::DuplicateProbability`] for repeated rows within a month.
    pub fn from_rows(rows: &[(u8, f64, f64)]) -> Result<Self, FdcError> {
        let mut by_month: BTreeMap<u8, Vec<(f64, f64)>> = BTreeMap::new();
        for &(month, probability, scalar) in rows {
            if !(1..=12).contains(&month) {
                return Err(FdcError::InvalidMonth { month });
            }
            by_month
                .entry(month)
                .or_default()
                .push((probability, scalar));
        }

        let mut curves = BTreeMap::new();
        for (month, month_rows) in by_month {
            let curve = ScalarFdc::from_rows(month_rows).map_err(|e| match e {
                FdcError::DuplicateProbability { probability, .. } => {
                    FdcError::DuplicateProbability { month, probability }
                }
                other => other,
            })?;
            curves.insert(month, curve);
        }
        Ok(Self { curves })
    }

    /// Inserts (or replaces) the curve for a month.
    ///
    /// # Errors
    ///
    /// Returns [`FdcError::InvalidMonth`] for a month outside 1..=12.
    pub fn insert(&mut self, month: u8, curve: ScalarFdc) -> Result<(), FdcError> {
        if !(1..=12).contains(&month) {
            return Err(FdcError::InvalidMonth { month });
        }
        self.curves.insert(month, curve);
        Ok(())
    }

    /// Months (1..=12) with a curve, ascending.
    pub fn months(&self) -> Vec<u8> {
        self.curves.keys().copied().collect()
    }

    /// The curve for a month, if present.
    pub fn curve(&self, month: u8) -> Option<&ScalarFdc> {
        self.curves.get(&month)
    }

    /// Returns `true` if no month has a curve.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterates over (month, curve) pairs in ascending month order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &ScalarFdc)> {
        self.curves.iter().map(|(&m, c)| (m, c))
    }
}
